//! Error types for cms-store

use cms_content::Category;
use std::path::PathBuf;

/// Result type for cms-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in backend adapter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested document does not exist.
    #[error("{category} document not found: {id}")]
    NotFound { category: Category, id: String },

    /// A create targeted an id that is already taken.
    #[error("{category} document already exists: {id}")]
    AlreadyExists { category: Category, id: String },

    /// The supplied revision marker no longer matches the stored document;
    /// another actor modified it. The caller must re-read and retry.
    #[error("Stale revision for {category} document {id}")]
    Conflict { category: Category, id: String },

    /// The selected backend does not implement this operation.
    #[error("Operation not supported by this backend: {operation}")]
    Unsupported { operation: &'static str },

    /// Transient transport or service failure. Safe to retry.
    #[error("Backend unavailable: {reason}")]
    BackendUnavailable { reason: String },

    /// The service rejected the request for a reason outside the taxonomy
    /// (bad credential, malformed path). Not retried automatically.
    #[error("Backend rejected request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn not_found(category: Category, id: impl Into<String>) -> Self {
        Self::NotFound {
            category,
            id: id.into(),
        }
    }

    pub fn conflict(category: Category, id: impl Into<String>) -> Self {
        Self::Conflict {
            category,
            id: id.into(),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether a caller may safely retry the failed call unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::BackendUnavailable { .. })
    }
}
