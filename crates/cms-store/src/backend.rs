//! Backend adapter trait

use crate::Result;
use async_trait::async_trait;
use cms_content::Category;
use serde_json::Value;

/// A document's listing entry as the backend sees it: identity and revision,
/// body deferred until individually read.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    /// Document id (file stem).
    pub id: String,

    /// Current revision marker of the stored file.
    pub revision: String,

    /// Backend-specific location (repository path or filesystem path).
    pub location: String,
}

/// A document's decoded body plus the revision marker it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub body: Value,
    pub revision: String,
}

/// Storage operations over one content repository.
///
/// Implementations are injected into the facade at construction time. All
/// mutating calls are conditioned on the revision marker obtained from the
/// most recent read of that exact document; "last writer with the freshest
/// revision wins" is the sole ordering mechanism across actors.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// List the documents in a category.
    ///
    /// Entries come back in a stable (id-sorted) order. An empty or missing
    /// category directory yields an empty vector, not an error.
    async fn list(&self, category: Category) -> Result<Vec<RawEntry>>;

    /// Read one document. Fails with `NotFound` if the id does not exist.
    async fn read(&self, category: Category, id: &str) -> Result<RawDocument>;

    /// Write one document, returning the new revision marker.
    ///
    /// With `revision` present this is a conditional update that fails with
    /// `Conflict` when the stored marker no longer matches. With `revision`
    /// absent it creates the document and fails with `AlreadyExists` when
    /// the id is taken.
    async fn write(
        &self,
        category: Category,
        id: &str,
        body: &Value,
        revision: Option<&str>,
    ) -> Result<String>;

    /// Delete one document, conditioned on the caller's last-known revision.
    ///
    /// Fails with `Conflict` on marker mismatch and `NotFound` if the
    /// document is already gone.
    async fn delete(&self, category: Category, id: &str, revision: &str) -> Result<()>;
}
