/*!
# Unified Error Type

This module provides the unified error enum used across bookbind, together
with a `Result` alias. All recoverable failures (malformed challenge input,
bad generator parameters, I/O trouble) are reported through [`BookbindError`];
violations of internal engine invariants are not recoverable and abort the
process instead (see the best-found tracker).
*/

use std::error::Error;
use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BookbindError>;

/// Unified error type for all bookbind operations.
#[derive(Debug)]
pub enum BookbindError {
    /// Malformed challenge-format input.
    Parse(String),

    /// Invalid argument or parameter.
    InvalidArgument(String),

    /// I/O error while reading or writing a graph.
    Io(String),
}

impl BookbindError {
    /// Creates a parse error with the given message.
    pub fn parse(message: impl Into<String>) -> Self {
        BookbindError::Parse(message.into())
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BookbindError::InvalidArgument(message.into())
    }
}

impl fmt::Display for BookbindError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BookbindError::Parse(msg) => write!(f, "Parse error: {}", msg),
            BookbindError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BookbindError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error for BookbindError {}

impl From<std::io::Error> for BookbindError {
    fn from(e: std::io::Error) -> Self {
        BookbindError::Io(e.to_string())
    }
}
