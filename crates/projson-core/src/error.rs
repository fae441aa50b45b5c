//! Error types for ProJSON core operations.

use thiserror::Error;

/// Errors that can occur while formatting JSON or persisting configuration.
#[derive(Error, Debug)]
pub enum ProJsonError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout projson-core.
pub type Result<T> = std::result::Result<T, ProJsonError>;
