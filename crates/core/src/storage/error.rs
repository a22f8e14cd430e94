use thiserror::Error;

/// Errors that can occur during storage operations.
///
/// The storage layer performs no retries and no recovery: every failed round
/// trip surfaces as exactly one of these, carrying the store's own message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Store request failed: {0}")]
    Request(String),
    #[error("Invalid record data: {0}")]
    InvalidData(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
