//! Cart error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// No line at the given position.
    #[error("No cart line at index {0}")]
    LineNotFound(usize),

    /// The storage backend refused an operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The stored cart could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
