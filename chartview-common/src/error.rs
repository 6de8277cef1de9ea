//! Common error type for chartview

use thiserror::Error;

/// Common result type for chartview operations
pub type Result<T> = std::result::Result<T, Error>;

/// The single failure type surfaced by the data-access layer.
///
/// Every upstream failure (unreachable service, error status, undecodable
/// payload, missing contract field) is normalized into one of these before
/// it reaches a caller; no operation-specific error kinds exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable description, suitable for direct display.
    pub fn message(&self) -> &str {
        &self.message
    }
}
