use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown rating: {0}")]
    UnknownRating(String),

    #[error("unknown status: {0}")]
    UnknownStatus(String),
}
