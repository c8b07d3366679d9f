// Rust guideline compliant 2026-10-18

//! Error types for the envelope core library.

use thiserror::Error;

/// Result type alias for envelope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for envelope operations.
///
/// Building an envelope never fails; these errors come from status-name
/// resolution, documentation input parsing, and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// Status name is not in the status table or alias table.
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// Documentation input has the wrong shape.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file or environment value is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by a log hook.
///
/// The builder discards these; they exist so hooks can use `?` internally.
#[derive(Debug, Error)]
#[error("Log hook failed: {0}")]
pub struct HookError(pub String);

impl HookError {
    /// Creates a hook error from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<serde_json::Error> for HookError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}
