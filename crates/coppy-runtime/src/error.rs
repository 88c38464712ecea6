//! Error types for the content runtime

use thiserror::Error;

/// Result type alias for content operations
pub type ContentResult<T> = Result<T, ContentError>;

/// Error type for content operations
#[derive(Error, Debug)]
pub enum ContentError {
    /// Reading or writing persisted content failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted content or state could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The content source failed or returned something unusable
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
