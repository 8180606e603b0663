//! Backend-agnostic content repository facade
//!
//! One typed operation family per document category, all following the same
//! shape: list, get, create, update, remove. Category-specific invariants
//! (theme exclusivity) are enforced here, on top of raw adapter calls.

use crate::error::{Error, Result};
use crate::mode::Mode;
use chrono::{SecondsFormat, Utc};
use cms_content::{Category, Document, DocumentSummary, slugify, theme, validate_body};
use cms_store::{ContentBackend, LocalBackend, RemoteBackend, RemoteConfig};
use futures::future::join_all;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Facade over one content repository.
///
/// The backend adapter is injected once at construction; every operation
/// goes through the same [`ContentBackend`] regardless of mode.
pub struct ContentRepository {
    backend: Arc<dyn ContentBackend>,
}

impl ContentRepository {
    pub fn new(backend: Arc<dyn ContentBackend>) -> Self {
        Self { backend }
    }

    /// Read-only repository over a local content tree.
    pub fn local(root: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(LocalBackend::new(root)))
    }

    /// Repository over the remote contents API.
    pub fn remote(config: RemoteConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(RemoteBackend::new(config)?)))
    }

    /// Resolve a [`Mode`] into a repository. The adapter choice happens
    /// here, exactly once; no operation branches on the mode afterwards.
    pub fn from_mode(mode: Mode) -> Result<Self> {
        match mode {
            Mode::Local { root } => Ok(Self::local(root)),
            Mode::Remote(config) => Self::remote(config),
        }
    }

    /// List a category's documents as summaries.
    ///
    /// The backend listing is followed by one read per document, issued
    /// concurrently. A document that cannot be read degrades to an id-only
    /// placeholder instead of failing the whole listing; this is the one
    /// deliberate exception to fail-loudly error handling.
    pub async fn list(&self, category: Category) -> Result<Vec<DocumentSummary>> {
        let entries = self.backend.list(category).await?;
        let reads = entries
            .iter()
            .map(|entry| self.backend.read(category, &entry.id));
        let bodies = join_all(reads).await;

        let summaries = entries
            .into_iter()
            .zip(bodies)
            .map(|(entry, read)| match read {
                Ok(raw) => {
                    let mut document = Document::new(category, entry.id, raw.body);
                    document.revision = Some(raw.revision);
                    document.summary()
                }
                Err(e) => {
                    warn!(category = %category, id = %entry.id, error = %e,
                        "document unreadable, degrading to placeholder summary");
                    DocumentSummary::unreadable(entry.id)
                }
            })
            .collect();
        Ok(summaries)
    }

    /// Fetch one published document.
    pub async fn get(&self, category: Category, id: &str) -> Result<Document> {
        let raw = self.backend.read(category, id).await?;
        Ok(Document {
            category,
            id: id.to_string(),
            body: raw.body,
            revision: Some(raw.revision),
        })
    }

    /// Create a document, deriving its id from the body's `title` or `name`.
    pub async fn create(&self, category: Category, body: Value) -> Result<Document> {
        let id = derive_id(&body)?;
        self.create_with_id(category, &id, body).await
    }

    /// Create a document under an explicit id.
    ///
    /// Validates the body, stamps `createdAt`/`updatedAt` (caller-supplied
    /// timestamps are never trusted on creation), and performs a
    /// revisionless write that fails with `AlreadyExists` on collision.
    pub async fn create_with_id(
        &self,
        category: Category,
        id: &str,
        body: Value,
    ) -> Result<Document> {
        validate_body(category, &body)?;
        let body = stamp(body, true);

        let revision = self.backend.write(category, id, &body, None).await?;
        info!(category = %category, id, "created document");
        Ok(Document {
            category,
            id: id.to_string(),
            body,
            revision: Some(revision),
        })
    }

    /// Conditionally overwrite a document.
    ///
    /// `revision` must come from the caller's most recent read of this exact
    /// document; a stale marker fails with `Conflict` and the caller must
    /// re-read and retry. No automatic merge is attempted.
    pub async fn update(
        &self,
        category: Category,
        id: &str,
        body: Value,
        revision: &str,
    ) -> Result<Document> {
        validate_body(category, &body)?;
        let body = stamp(body, false);

        let new_revision = self
            .backend
            .write(category, id, &body, Some(revision))
            .await?;
        debug!(category = %category, id, revision = %new_revision, "updated document");
        Ok(Document {
            category,
            id: id.to_string(),
            body,
            revision: Some(new_revision),
        })
    }

    /// Conditionally delete a document.
    ///
    /// Deleting the currently active theme is precluded by the exclusivity
    /// invariant; the caller must activate a replacement first.
    pub async fn remove(&self, category: Category, id: &str, revision: &str) -> Result<()> {
        if category == Category::Theme
            && let Some(active) = self.active_theme().await?
            && active.id == id
        {
            return Err(Error::ActiveThemeProtected { id: id.to_string() });
        }

        self.backend.delete(category, id, revision).await?;
        info!(category = %category, id, "deleted document");
        Ok(())
    }

    /// The currently active theme, if any.
    ///
    /// Zero active themes is a valid (degraded) state; readers must not
    /// assume one exists. Themes that cannot be read are skipped.
    pub async fn active_theme(&self) -> Result<Option<Document>> {
        let entries = self.backend.list(Category::Theme).await?;
        let reads = entries
            .iter()
            .map(|entry| self.backend.read(Category::Theme, &entry.id));
        let bodies = join_all(reads).await;

        for (entry, read) in entries.into_iter().zip(bodies) {
            match read {
                Ok(raw) if theme::is_active(&raw.body) => {
                    let mut document = Document::new(Category::Theme, entry.id, raw.body);
                    document.revision = Some(raw.revision);
                    return Ok(Some(document));
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(id = %entry.id, error = %e, "skipping unreadable theme");
                }
            }
        }
        Ok(None)
    }

    /// Make `id` the only active theme.
    ///
    /// Two conditional updates: deactivate the current active theme (if any
    /// and different), then activate the target. The sequence is not atomic;
    /// when the second step fails the repository is left with zero active
    /// themes and the error reports which theme was deactivated. Retrying
    /// with the same target is idempotent — the fresh read picks up the
    /// target's current, non-active state.
    pub async fn activate_theme(&self, id: &str) -> Result<()> {
        let current = self.active_theme().await?;
        if let Some(active) = &current
            && active.id == id
        {
            debug!(id, "theme already active, nothing to do");
            return Ok(());
        }

        let mut deactivated = None;
        if let Some(active) = current {
            let revision = active
                .revision
                .clone()
                .unwrap_or_default();
            let body = theme::with_active(&active.body, false);
            self.update(Category::Theme, &active.id, body, &revision)
                .await?;
            info!(id = %active.id, "deactivated previous theme");
            deactivated = Some(active.id);
        }

        match self.activate_target(id).await {
            Ok(()) => {
                info!(id, "activated theme");
                Ok(())
            }
            Err(source) if deactivated.is_some() => Err(Error::ActivationIncomplete {
                deactivated,
                source: Box::new(source),
            }),
            Err(source) => Err(source),
        }
    }

    async fn activate_target(&self, id: &str) -> Result<()> {
        let target = self.get(Category::Theme, id).await?;
        let revision = target.revision.unwrap_or_default();
        let body = theme::with_active(&target.body, true);
        self.update(Category::Theme, id, body, &revision).await?;
        Ok(())
    }
}

/// Derive a document id by slugifying the body's `title` or `name`.
fn derive_id(body: &Value) -> Result<String> {
    let name = body
        .get("title")
        .or_else(|| body.get("name"))
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Validation {
            reason: "cannot derive an id: body has no `title` or `name`".to_string(),
        })?;

    let id = slugify(name);
    if id.is_empty() {
        return Err(Error::Validation {
            reason: format!("name `{name}` slugifies to an empty id"),
        });
    }
    Ok(id)
}

/// Stamp repository-owned timestamps into a body.
///
/// On create both timestamps are overwritten; on update only `updatedAt`
/// changes and the stored `createdAt` travels with the caller's body.
fn stamp(mut body: Value, is_create: bool) -> Value {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    if let Some(object) = body.as_object_mut() {
        if is_create {
            object.insert("createdAt".to_string(), json!(now));
        }
        object.insert("updatedAt".to_string(), json!(now));
    }
    body
}
