//! String and character literal lexing.
//!
//! Both readers strip their quotes. Only the string reader knows an escape,
//! and only one: `\"`.

use crate::error::{LexResult, LexicalError};
use crate::token::{Category, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Consumes characters up to the next unescaped `"`. A backslash directly
    /// before a quote is dropped and the quote becomes content; any other
    /// backslash is kept as is. Reaching the end of the source before the
    /// closing quote is tolerated.
    ///
    /// # Errors
    ///
    /// [`LexicalError::StringTooLong`] if the decoded content is longer than
    /// the configured maximum.
    pub fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();

        let mut content = String::new();
        let mut length = 0;

        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            if self.cursor.current_char() == '\\' && self.cursor.peek_char(1) == '"' {
                self.cursor.advance();
            }
            content.push(self.cursor.current_char());
            length += 1;
            self.cursor.advance();
        }

        if length > self.config.max_string_len {
            return Err(LexicalError::StringTooLong {
                length,
                max: self.config.max_string_len,
                line: self.token_start_line,
                column: self.token_start_column,
            });
        }

        // Closing quote; a no-op when the string ran to the end of the source.
        self.cursor.advance();

        Ok(self.make_token(Category::StringLiteral, content))
    }

    /// Lexes a character literal.
    ///
    /// Takes exactly one raw character as content, whatever it is, and then
    /// requires a closing `'`. There are no escapes: `'\''` does not lex.
    ///
    /// # Errors
    ///
    /// [`LexicalError::UnterminatedChar`] if the source ends early or the
    /// character after the content is not `'`.
    pub fn lex_char(&mut self) -> LexResult<Token> {
        self.cursor.advance();

        if self.cursor.is_at_end() {
            return Err(self.unterminated_char());
        }
        let content = self.cursor.current_char();
        self.cursor.advance();

        if self.cursor.is_at_end() || self.cursor.current_char() != '\'' {
            return Err(self.unterminated_char());
        }
        self.cursor.advance();

        Ok(self.make_token(Category::CharLiteral, content))
    }

    fn unterminated_char(&self) -> LexicalError {
        LexicalError::UnterminatedChar {
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }
}
