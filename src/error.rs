use crate::cat::CatId;

/// Errors raised by the cat model and the favorites store
#[derive(Debug, thiserror::Error)]
pub enum CatError {
    #[error("invalid sequence format: {reason}")]
    InvalidDna { reason: String },

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("cat has no parentage and cannot be favorited")]
    NotBred,

    #[error("no favorite with id {0}")]
    NotFound(CatId),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatError>;
