//! Comment lexing.
//!
//! Comments are tokens here, not trivia. Each keeps its opening delimiter
//! in the token text.

use crate::token::{Category, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `//` comment up to, not including, the next newline.
    pub fn lex_line_comment(&mut self) -> Token {
        self.lex_to_end_of_line(Category::LineComment)
    }

    /// Lexes a `///` comment up to, not including, the next newline.
    pub fn lex_doc_comment(&mut self) -> Token {
        self.lex_to_end_of_line(Category::DocComment)
    }

    /// Lexes a block comment through the first `*/` after the opening `/*`.
    ///
    /// Block comments do not nest. If the source ends first the comment
    /// still terminates, and a closing `*/` is appended to the token text.
    pub fn lex_block_comment(&mut self) -> Token {
        self.cursor.advance_n(2);

        while !self.cursor.is_at_end()
            && !(self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/')
        {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            let text = format!("{}*/", self.cursor.slice_from(self.token_start));
            return self.make_token(Category::BlockComment, text);
        }

        self.cursor.advance_n(2);
        let text = self.cursor.slice_from(self.token_start);
        self.make_token(Category::BlockComment, text)
    }

    fn lex_to_end_of_line(&mut self, category: Category) -> Token {
        self.cursor.eat_while(|c| c != '\n');
        let text = self.cursor.slice_from(self.token_start);
        self.make_token(category, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LexerConfig;
    use crate::token::{Category, Span};

    #[test]
    fn test_line_comment() {
        let config = LexerConfig::default();
        let mut lexer = crate::Lexer::new("// hi\nint", &config);
        let token = lexer.lex_line_comment();
        assert!(token.is(Category::LineComment, "// hi"));
        assert_eq!(lexer.position(), 5);
    }

    #[test]
    fn test_line_comment_at_end_of_source() {
        let config = LexerConfig::default();
        let mut lexer = crate::Lexer::new("//", &config);
        assert!(lexer.lex_line_comment().is(Category::LineComment, "//"));
    }

    #[test]
    fn test_doc_comment() {
        let config = LexerConfig::default();
        let mut lexer = crate::Lexer::new("/// Returns x.\nx", &config);
        assert!(lexer
            .lex_doc_comment()
            .is(Category::DocComment, "/// Returns x."));
    }

    #[test]
    fn test_block_comment() {
        let config = LexerConfig::default();
        let mut lexer = crate::Lexer::new("/* a\n b */x", &config);
        let token = lexer.lex_block_comment();
        assert!(token.is(Category::BlockComment, "/* a\n b */"));
        assert_eq!(token.span(), Span::new(0, 10, 1, 1));
    }

    #[test]
    fn test_block_comment_does_not_nest() {
        let config = LexerConfig::default();
        let mut lexer = crate::Lexer::new("/* a /* b */ c */", &config);
        assert!(lexer
            .lex_block_comment()
            .is(Category::BlockComment, "/* a /* b */"));
    }

    #[test]
    fn test_block_comment_opener_star_is_not_closer() {
        let config = LexerConfig::default();
        let mut lexer = crate::Lexer::new("/*/ x */", &config);
        assert!(lexer
            .lex_block_comment()
            .is(Category::BlockComment, "/*/ x */"));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let config = LexerConfig::default();
        let mut lexer = crate::Lexer::new("/* unterminated", &config);
        let token = lexer.lex_block_comment();
        assert!(token.is(Category::BlockComment, "/* unterminated*/"));
        assert_eq!(token.span().end, 15);
    }

    #[test]
    fn test_block_comment_trailing_star() {
        let config = LexerConfig::default();
        let mut lexer = crate::Lexer::new("/* x *", &config);
        assert!(lexer
            .lex_block_comment()
            .is(Category::BlockComment, "/* x **/"));
    }
}
