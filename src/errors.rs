use thiserror::Error;

/// Error type that captures engine boundary failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid tier ladder: {0}")]
    InvalidLadder(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
