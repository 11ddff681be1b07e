//! Error types for the recipe book
//!
//! Not-found is not an error anywhere in this crate family: lookups return
//! `Option` and mutations return `bool`. What remains here are faults of the
//! underlying document or its configuration.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for recipe book operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the recipe book
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (disk full, permission denied, ...)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The persisted document exists but could not be decoded
    #[error("Corrupt recipe document at {}: {reason}", .path.display())]
    Corruption {
        /// Path of the document
        path: PathBuf,
        /// Decoder message
        reason: String,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
