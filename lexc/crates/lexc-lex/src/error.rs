//! Lexical errors.
//!
//! Only two conditions abort a scan. Every other malformed input is absorbed
//! into a best-effort token.

use thiserror::Error;

/// An unrecoverable error raised while scanning.
///
/// The scan stops at the first error; no partial token sequence is exposed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// The decoded content of a string literal exceeds the configured limit.
    #[error(
        "string literal too long at {line}:{column}: {length} characters exceeds the maximum of {max}"
    )]
    StringTooLong {
        /// Decoded length in characters.
        length: usize,
        /// Configured maximum.
        max: usize,
        /// Line of the opening quote.
        line: u32,
        /// Column of the opening quote.
        column: u32,
    },

    /// A character literal is not followed by its closing `'`.
    #[error("unterminated character literal at {line}:{column}")]
    UnterminatedChar {
        /// Line of the opening quote.
        line: u32,
        /// Column of the opening quote.
        column: u32,
    },
}

impl LexicalError {
    /// Line where the offending literal starts.
    pub fn line(&self) -> u32 {
        match self {
            LexicalError::StringTooLong { line, .. } | LexicalError::UnterminatedChar { line, .. } => {
                *line
            },
        }
    }

    /// Column where the offending literal starts.
    pub fn column(&self) -> u32 {
        match self {
            LexicalError::StringTooLong { column, .. }
            | LexicalError::UnterminatedChar { column, .. } => *column,
        }
    }
}

/// Result type alias for scanning.
pub type LexResult<T> = std::result::Result<T, LexicalError>;
