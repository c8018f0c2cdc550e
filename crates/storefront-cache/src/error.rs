//! Persistence error types.

use thiserror::Error;

/// Errors that can occur when reading or writing the key-value store.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The backing store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A stored value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure in a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
