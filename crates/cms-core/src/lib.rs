//! Content repository facade for CMS Manager
//!
//! This crate sits above the backend adapters and below the editors:
//!
//! ```text
//!        Editors / Lists
//!              |
//!          cms-core        (facade, invariants, drafts)
//!              |
//!          cms-store       (local / remote adapters)
//!              |
//!         cms-content      (document model)
//! ```
//!
//! It provides:
//!
//! - **[`ContentRepository`]**: backend-agnostic typed operations per
//!   document category, revision management, and the theme exclusivity
//!   invariant (at most one active theme).
//! - **[`DraftOverlay`]**: client-local cache of unpublished edits, keyed by
//!   `"<category>:<id>"`, cleared on publish, never expiring.
//! - **[`Workbench`]**: the merged view editors consume — drafts preferred
//!   over published bodies, listings annotated with draft indicators.

pub mod drafts;
pub mod error;
pub mod mode;
pub mod repository;
pub mod workbench;

pub use drafts::DraftOverlay;
pub use error::{Error, Result};
pub use mode::Mode;
pub use repository::ContentRepository;
pub use workbench::Workbench;
