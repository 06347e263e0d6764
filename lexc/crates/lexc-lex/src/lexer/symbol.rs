//! Single-character symbol lexing.

use crate::token::{Category, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes exactly one character as a `Symbol`.
    ///
    /// Operators are never grouped: `==` is two symbols.
    pub fn lex_symbol(&mut self) -> Token {
        self.cursor.advance();
        let text = self.cursor.slice_from(self.token_start);
        self.make_token(Category::Symbol, text)
    }
}
