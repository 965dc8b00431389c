//! Error types for memoria.

use thiserror::Error;

/// Result type alias using memoria's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for memoria operations.
///
/// Interaction paths (navigation, filtering, search) are total and never
/// produce these; they only surface while loading and validating records or
/// reading configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// A record violates a dataset invariant (duplicate id, inverted dates)
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    /// Serialization/deserialization error (includes malformed dates)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
