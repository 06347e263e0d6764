//! Identifier and keyword lexing.

use crate::token::{Category, Token};
use crate::unicode;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of letters, digits and underscores. The
    /// dispatcher only calls this on a letter, so an identifier never starts
    /// with a digit or underscore. The text is then checked against the
    /// configured keyword set.
    ///
    /// # Returns
    ///
    /// A `Keyword` token if the text is reserved, otherwise `Identifier`.
    pub fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(unicode::is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        let category = if self.config.keywords.contains(text) {
            Category::Keyword
        } else {
            Category::Identifier
        };

        self.make_token(category, text)
    }
}
