//! Error handling module for the lext CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use lexc_lex::LexicalError;
use thiserror::Error;

/// Main error type for the lext CLI application.
#[derive(Error, Debug)]
pub enum LextError {
    /// Error when the configuration cannot be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when user input does not make sense.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The scan of the source file aborted.
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexicalError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LextError.
pub type Result<T> = std::result::Result<T, LextError>;
