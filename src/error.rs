//! Error types for the resource store.

use thiserror::Error;

/// A failed remote call.
///
/// The backend's failure reason is carried as an opaque human-readable
/// message. The store does not classify errors by kind (network, validation,
/// authorization); the message is stored and surfaced verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ClientError {
    /// Human-readable failure message from the backend or transport.
    pub message: String,
}

impl ClientError {
    /// Create an error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for ClientError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for ClientError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Result type for remote calls.
pub type Result<T> = std::result::Result<T, ClientError>;
