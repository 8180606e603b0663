//! Document model for CMS Manager
//!
//! Defines the unit of storage shared by every backend: JSON documents
//! grouped into categories (pages, layouts, themes, navigation menus,
//! component schemas), each addressed by a slug-derived id and carrying an
//! opaque revision marker for optimistic concurrency.

pub mod category;
pub mod document;
pub mod error;
pub mod layout;
pub mod revision;
pub mod slug;
pub mod theme;
pub mod validation;

pub use category::Category;
pub use document::{Document, DocumentSummary};
pub use error::{Error, Result};
pub use layout::{LayoutBody, LayoutSection, NavigationStyle};
pub use revision::compute_revision;
pub use slug::slugify;
pub use theme::{FontStacks, ThemeBody};
pub use validation::{ValidationError, validate_body};
