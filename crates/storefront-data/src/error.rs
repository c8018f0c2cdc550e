//! Repository error types.

use std::time::Duration;

/// Errors from a product repository.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not be reached or answered with an error status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store answered with data that does not fit the row schema.
    #[error("Schema error: {0}")]
    Schema(String),

    /// No answer within the allotted time.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl RepositoryError {
    /// Check if retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }
}

impl From<reqwest::Error> for RepositoryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RepositoryError::Schema(e.to_string())
        } else {
            RepositoryError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(e: serde_json::Error) -> Self {
        RepositoryError::Schema(e.to_string())
    }
}
