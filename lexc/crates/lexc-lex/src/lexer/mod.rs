//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch table and scan loop
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and decimal literal lexing
//! - `literal` - String and character literal lexing
//! - `comment` - Line, doc and block comment lexing
//! - `symbol` - Single-character symbol lexing

mod comment;
mod core;
mod identifier;
mod literal;
mod number;
mod symbol;

pub use core::{classify, Lexer, Reader};
