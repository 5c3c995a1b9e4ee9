use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("rating out of range: {0} (expected 0-5)")]
    InvalidRating(u8),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unsupported export version: {0}")]
    UnsupportedVersion(String),
}
