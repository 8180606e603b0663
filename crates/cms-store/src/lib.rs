//! Backend adapters for CMS Manager
//!
//! Two interchangeable implementations of the [`ContentBackend`] trait:
//!
//! - [`LocalBackend`] — reads documents from a local content tree during
//!   development; mutations are unsupported since local files are not the
//!   system of record.
//! - [`RemoteBackend`] — full CRUD against the git hosting service's
//!   contents API, using the service's content hash as the revision marker
//!   for optimistic concurrency.
//!
//! The adapter is selected once at construction time by the facade in
//! `cms-core`; callers never branch on the backend per call.

pub mod backend;
pub mod error;
pub mod local;
pub mod remote;

pub use backend::{ContentBackend, RawDocument, RawEntry};
pub use error::{Error, Result};
pub use local::LocalBackend;
pub use remote::{RemoteBackend, RemoteConfig};
