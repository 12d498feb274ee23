use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid task ID format: {0}")]
    InvalidTaskId(String),

    #[error("Unknown column: {0}")]
    InvalidColumn(String),

    #[error("Unknown priority: {0}")]
    InvalidPriority(String),

    #[error("Duplicate task ID in snapshot: {0}")]
    DuplicateTaskId(String),

    #[error("Board not initialized")]
    BoardNotInitialized,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
