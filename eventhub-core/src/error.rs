//! Error types for eventhub.

use thiserror::Error;

/// Errors that can occur in eventhub operations.
#[derive(Error, Debug)]
pub enum EventHubError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for EventHubError {
    fn from(e: serde_json::Error) -> Self {
        EventHubError::Serialization(e.to_string())
    }
}

/// Result type alias for eventhub operations.
pub type EventHubResult<T> = Result<T, EventHubError>;
