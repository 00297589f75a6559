//! Common error types for the oracle crates.

use thiserror::Error;

/// A result type using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core errors that can occur while decoding domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A timestamp did not match any accepted format.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// An identifier was empty.
    #[error("identifier must not be empty")]
    EmptyId,
}
