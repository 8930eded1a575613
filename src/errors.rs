use thiserror::Error;

/// Error type covering snapshot persistence failures.
#[derive(Debug, Error)]
pub enum TreasuryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

pub type Result<T> = std::result::Result<T, TreasuryError>;
