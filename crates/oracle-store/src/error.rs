//! Error types for the storage layer.

use thiserror::Error;

/// A result type using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while loading or reading a dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The dataset file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON or does not match the schema.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The dataset parsed but violates a table invariant.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
