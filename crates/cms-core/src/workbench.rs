//! Merged editing view: drafts layered over published documents
//!
//! Editors read through the workbench so their own unsaved state round-trips:
//! an existing draft always wins over the published body. Listings show
//! published metadata plus a draft indicator — summary rows never contain
//! draft content.

use crate::drafts::DraftOverlay;
use crate::error::{Error, Result};
use crate::repository::ContentRepository;
use cms_content::{Category, Document, DocumentSummary};
use serde_json::Value;
use tracing::debug;

/// A content repository paired with this client's draft overlay.
pub struct Workbench {
    repository: ContentRepository,
    drafts: DraftOverlay,
}

impl Workbench {
    pub fn new(repository: ContentRepository, drafts: DraftOverlay) -> Self {
        Self { repository, drafts }
    }

    pub fn repository(&self) -> &ContentRepository {
        &self.repository
    }

    pub fn drafts(&self) -> &DraftOverlay {
        &self.drafts
    }

    /// Fetch a document, preferring this client's draft body.
    ///
    /// For a drafted document that is already published, the returned
    /// revision is the published one, so a subsequent publish carries a
    /// valid precondition. A draft for a never-published id comes back with
    /// no revision.
    pub async fn get(&self, category: Category, id: &str) -> Result<Document> {
        let Some(draft) = self.drafts.load_draft(category, id) else {
            return self.repository.get(category, id).await;
        };

        debug!(category = %category, id, "serving draft body");
        let revision = match self.repository.get(category, id).await {
            Ok(published) => published.revision,
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        Ok(Document {
            category,
            id: id.to_string(),
            body: draft.clone(),
            revision,
        })
    }

    /// List published summaries, annotated with draft indicators.
    pub async fn list(&self, category: Category) -> Result<Vec<DocumentSummary>> {
        let mut summaries = self.repository.list(category).await?;
        for summary in &mut summaries {
            summary.has_draft = self.drafts.has_draft(category, &summary.id);
        }
        Ok(summaries)
    }

    /// Record a local edit. Unconditional overwrite of any prior draft.
    pub fn save_draft(&mut self, category: Category, id: &str, body: Value) -> Result<()> {
        self.drafts.save_draft(category, id, body)
    }

    /// Publish a draft.
    ///
    /// With a revision this is a conditional update of the published
    /// document; without one it creates the document under the draft's id.
    /// The draft is cleared only after the write succeeds — a `Conflict`
    /// leaves it intact for the caller to re-read and retry.
    pub async fn publish(
        &mut self,
        category: Category,
        id: &str,
        revision: Option<&str>,
    ) -> Result<Document> {
        let body = self
            .drafts
            .load_draft(category, id)
            .cloned()
            .ok_or_else(|| Error::NoDraft {
                category,
                id: id.to_string(),
            })?;

        let published = match revision {
            Some(revision) => self.repository.update(category, id, body, revision).await?,
            None => self.repository.create_with_id(category, id, body).await?,
        };

        self.drafts.clear_draft(category, id)?;
        Ok(published)
    }

    /// Drop a draft without publishing it.
    pub fn discard(&mut self, category: Category, id: &str) -> Result<()> {
        self.drafts.clear_draft(category, id)
    }
}
