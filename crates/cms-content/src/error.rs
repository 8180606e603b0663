//! Error types for cms-content

/// Result type for cms-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cms-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown document category: {name}")]
    UnknownCategory { name: String },

    #[error("Document body for {id} is not a JSON object")]
    BodyNotAnObject { id: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
