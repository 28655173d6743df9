//! Error types for the preference store.

use thiserror::Error;

/// Result type for preference operations.
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Errors that can occur while reading or persisting preferences.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The preferences file is not a JSON object of strings.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
