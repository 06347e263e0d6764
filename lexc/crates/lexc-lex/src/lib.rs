//! lexc-lex - Lexical Analyzer for C-family source text
//!
//! This crate turns source text into an ordered sequence of classified
//! tokens for a downstream parser. It only segments and classifies: there is
//! no parsing and no interpretation beyond the lexical category.
//!
//! # Example Usage
//!
//! ```
//! use lexc_lex::{tokenize, Category};
//!
//! let tokens = tokenize("int x = 10; // answer").unwrap();
//!
//! assert!(tokens[0].is(Category::Keyword, "int"));
//! assert!(tokens[1].is(Category::Identifier, "x"));
//! assert!(tokens[5].is(Category::LineComment, "// answer"));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, category and span definitions
//! - [`lexer`] - Dispatch table and the per-category readers
//! - [`cursor`] - Forward-only character cursor
//! - [`config`] - Keyword set and string length limit
//! - [`error`] - The two errors that abort a scan
//! - [`unicode`] - Letter and digit classes
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `int`, `float`, `double`, `char`, `void`, `if`, `else`, `while`, `for`,
//! `do`, `switch`, `case`, `break`, `continue`, `return`, `true`, `false`,
//! `null`, `sizeof`. The set is configurable through [`LexerConfig`].
//!
//! ## Identifiers
//!
//! A letter followed by letters, digits or underscores. Letters and digits
//! are Unicode general categories L* and Nd.
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Decimal**: `3.14`, and also `1.2.3` (no validation)
//! - **StringLiteral**: `"hello"`, `"say \"hi\""`
//! - **CharLiteral**: `'a'`
//!
//! ## Comments
//!
//! - **LineComment**: `// ...`
//! - **DocComment**: `/// ...`
//! - **BlockComment**: `/* ... */`
//!
//! ## Symbols
//!
//! Any other single character. `==` is two `=` symbols.
//!
//! # Errors
//!
//! Only an over-long string literal and an unclosed character literal are
//! errors. Unterminated strings and block comments are accepted.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{KeywordSet, LexerConfig, DEFAULT_KEYWORDS, DEFAULT_MAX_STRING_LEN};
pub use cursor::Cursor;
pub use error::{LexResult, LexicalError};
pub use lexer::Lexer;
pub use token::{Category, Span, Token};

/// Tokenizes `source` with the default configuration.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let config = LexerConfig::default();
    Lexer::new(source, &config).tokenize()
}
