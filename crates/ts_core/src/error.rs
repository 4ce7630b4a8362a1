use thiserror::Error;

/// Contract violations detected at the boundary of each operation.
///
/// Every variant is recoverable: a rejected operation leaves the match,
/// set and counter state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("point counter already produced a winner")]
    AlreadyDecided,

    #[error("set already concluded")]
    SetAlreadyConcluded,

    #[error("set index out of range: {index} (populated: {len})")]
    SetIndexOutOfRange { index: usize, len: usize },

    #[error("invalid player id: {id} (expected 0 or 1)")]
    InvalidPlayerId { id: u8 },

    #[error("unsupported schema version: {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u8, expected: u8 },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        ScoreError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
