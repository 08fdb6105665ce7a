//! Error types for the Lexica library.
//!
//! The ranking engine itself never fails: blank queries, empty corpora and
//! degenerate documents all degrade to empty results. Errors only arise on the
//! caller side of the engine, when rows are loaded from files, when a corpus is
//! validated, or when options are read from configuration.
//!
//! # Examples
//!
//! ```
//! use lexica::error::{LexicaError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(LexicaError::validation("corpus is empty"))
//! }
//!
//! assert_eq!(
//!     load().unwrap_err().to_string(),
//!     "Validation error: corpus is empty"
//! );
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexica operations.
#[derive(Error, Debug)]
pub enum LexicaError {
    /// I/O errors (reading row files, option files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (invalid tokenizer settings, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors (option files, command line settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexicaError.
pub type Result<T> = std::result::Result<T, LexicaError>;

impl LexicaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexicaError::Analysis(msg.into())
    }

    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        LexicaError::Validation(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexicaError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexicaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexicaError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexicaError::analysis("bad gram size");
        assert_eq!(error.to_string(), "Analysis error: bad gram size");

        let error = LexicaError::validation("missing title");
        assert_eq!(error.to_string(), "Validation error: missing title");

        let error = LexicaError::config("bad weight");
        assert_eq!(error.to_string(), "Configuration error: bad weight");

        let error = LexicaError::invalid_argument("max results");
        assert_eq!(error.to_string(), "Error: Invalid argument: max results");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexica_error = LexicaError::from(io_error);

        match lexica_error {
            LexicaError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let lexica_error: LexicaError = json_error.into();
        assert!(matches!(lexica_error, LexicaError::Json(_)));
    }
}
