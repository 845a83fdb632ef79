//! Error types for the trellis core library.
//!
//! The reducer itself never fails: actions that reference unknown ids are
//! no-ops. Errors only arise at the edges, when parsing user input into
//! parameters or loading a fixture from disk.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible trellis operation.
#[derive(Error, Debug)]
pub enum TrellisError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrellisError {
        TrellisError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrellisError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Shorthand for the error raised when a required text field is blank.
    pub fn required(field: impl Into<String>) -> Self {
        Self::invalid_input(field).with_reason("must not be empty")
    }
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, TrellisError>;
