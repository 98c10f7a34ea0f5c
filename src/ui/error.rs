//! Console error types

use thiserror::Error;

/// Errors that can occur in console operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error while reading or writing the terminal
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream ended while a token was expected
    #[error("Input stream closed")]
    Eof,
}

/// Result type for console operations
pub type Result<T> = std::result::Result<T, UiError>;
