//! Timeout configuration for repository calls.

use std::time::Duration;

/// Timeout configuration for catalog retrieval.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeoutConfig {
    /// Connection timeout for the HTTP client.
    pub connect: Duration,
    /// Budget for a single attempt, from request to decoded catalog.
    pub attempt: Duration,
}

impl TimeoutConfig {
    /// Create a new timeout configuration.
    pub fn new(connect: Duration, attempt: Duration) -> Self {
        Self { connect, attempt }
    }

    /// Create from a single per-attempt timeout.
    pub fn from_attempt(attempt: Duration) -> Self {
        Self {
            connect: attempt / 4,
            attempt,
        }
    }

    /// Create from a per-attempt timeout in milliseconds.
    pub fn from_millis(ms: u64) -> Self {
        Self::from_attempt(Duration::from_millis(ms))
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from_millis(3000)
    }
}
