//! Error types for cms-core

use cms_content::Category;
use cms_content::ValidationError;

/// Result type for cms-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in facade operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document body failed pre-write validation; nothing was sent to
    /// the backend.
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    /// Deleting the currently active theme is forbidden; activate a
    /// replacement first.
    #[error("Cannot delete the active theme `{id}`; activate another theme first")]
    ActiveThemeProtected { id: String },

    /// The two-step theme activation deactivated the previous theme but
    /// failed to activate the target, leaving zero active themes. Retrying
    /// the same activation is safe and restores exactly one active theme.
    #[error("Theme activation incomplete; no theme is active (deactivated: {deactivated:?})")]
    ActivationIncomplete {
        deactivated: Option<String>,
        #[source]
        source: Box<Error>,
    },

    /// A publish was requested for a document with no saved draft.
    #[error("No draft for {category} document {id}")]
    NoDraft { category: Category, id: String },

    /// Adapter-level errors propagate unchanged through the facade.
    #[error(transparent)]
    Store(#[from] cms_store::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::Validation {
            reason: e.to_string(),
        }
    }
}

impl Error {
    /// Whether the failed call may be retried unchanged. Only transient
    /// backend failures qualify; everything else needs caller intervention.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_retryable())
    }

    /// Whether the error is a stale-revision conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Store(cms_store::Error::Conflict { .. }))
    }

    /// Whether the error is a missing-document error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(cms_store::Error::NotFound { .. }))
    }
}
