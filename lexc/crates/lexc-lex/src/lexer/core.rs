//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch table that
//! picks a reader for the character under the cursor, and the scan loop.

use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::token::{Category, Span, Token};
use crate::unicode;

/// The token reader selected for the character under the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reader {
    /// Skip one whitespace character without emitting a token.
    Whitespace,
    /// Identifier or keyword.
    Identifier,
    /// Integer or decimal literal.
    Number,
    /// `///` comment.
    DocComment,
    /// `//` comment.
    LineComment,
    /// `/* */` comment.
    BlockComment,
    /// `"` string literal.
    String,
    /// `'` character literal.
    Char,
    /// Any other single character.
    Symbol,
}

/// One row of the dispatch table. `matches` receives the current character
/// and the two characters after it.
struct Rule {
    reader: Reader,
    matches: fn(char, char, char) -> bool,
}

/// Dispatch rules in priority order. The first matching row wins and the
/// last row matches everything.
const DISPATCH_TABLE: [Rule; 9] = [
    Rule { reader: Reader::Whitespace, matches: is_whitespace },
    Rule { reader: Reader::Identifier, matches: is_letter },
    Rule { reader: Reader::Number, matches: is_digit },
    Rule { reader: Reader::DocComment, matches: is_doc_comment_start },
    Rule { reader: Reader::LineComment, matches: is_line_comment_start },
    Rule { reader: Reader::BlockComment, matches: is_block_comment_start },
    Rule { reader: Reader::String, matches: is_double_quote },
    Rule { reader: Reader::Char, matches: is_single_quote },
    Rule { reader: Reader::Symbol, matches: any_char },
];

fn is_whitespace(c: char, _: char, _: char) -> bool {
    c.is_whitespace()
}

fn is_letter(c: char, _: char, _: char) -> bool {
    unicode::is_letter(c)
}

fn is_digit(c: char, _: char, _: char) -> bool {
    unicode::is_decimal_digit(c)
}

fn is_doc_comment_start(c: char, next: char, after_next: char) -> bool {
    c == '/' && next == '/' && after_next == '/'
}

fn is_line_comment_start(c: char, next: char, _: char) -> bool {
    c == '/' && next == '/'
}

fn is_block_comment_start(c: char, next: char, _: char) -> bool {
    c == '/' && next == '*'
}

fn is_double_quote(c: char, _: char, _: char) -> bool {
    c == '"'
}

fn is_single_quote(c: char, _: char, _: char) -> bool {
    c == '\''
}

fn any_char(_: char, _: char, _: char) -> bool {
    true
}

/// Selects the reader for `current`, given the two characters after it.
///
/// # Example
///
/// ```
/// use lexc_lex::lexer::{classify, Reader};
///
/// assert_eq!(classify('/', '/', '/'), Reader::DocComment);
/// assert_eq!(classify('/', '/', ' '), Reader::LineComment);
/// assert_eq!(classify('/', '=', ' '), Reader::Symbol);
/// ```
pub fn classify(current: char, next: char, after_next: char) -> Reader {
    DISPATCH_TABLE
        .iter()
        .find(|rule| (rule.matches)(current, next, after_next))
        .map_or(Reader::Symbol, |rule| rule.reader)
}

/// Lexer for C-family source text.
///
/// The lexer holds the only cursor over the source and hands it to one
/// reader at a time.
///
/// # Example
///
/// ```
/// use lexc_lex::{Category, Lexer, LexerConfig};
///
/// let config = LexerConfig::default();
/// let tokens = Lexer::new("int x = 10;", &config).tokenize().unwrap();
///
/// assert_eq!(tokens.len(), 5);
/// assert!(tokens[0].is(Category::Keyword, "int"));
/// assert!(tokens[3].is(Category::Integer, "10"));
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Keyword set and limits.
    pub(crate) config: &'a LexerConfig,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column number where the current token starts (1-based).
    pub(crate) token_start_column: u32,

    /// Set once an error has been returned; the scan does not resume.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a str, config: &'a LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            failed: false,
        }
    }

    /// Returns the next token, or `None` once the source is exhausted.
    ///
    /// Whitespace is consumed here and never produces a token.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(None);
            }

            let reader = classify(
                self.cursor.current_char(),
                self.cursor.peek_char(1),
                self.cursor.peek_char(2),
            );

            self.start_token();
            let token = match reader {
                Reader::Whitespace => {
                    self.cursor.advance();
                    continue;
                },
                Reader::Identifier => self.lex_identifier(),
                Reader::Number => self.lex_number(),
                Reader::DocComment => self.lex_doc_comment(),
                Reader::LineComment => self.lex_line_comment(),
                Reader::BlockComment => self.lex_block_comment(),
                Reader::String => self.lex_string()?,
                Reader::Char => self.lex_char()?,
                Reader::Symbol => self.lex_symbol(),
            };

            trace!(
                category = %token.category(),
                line = token.span().line,
                column = token.span().column,
                "token"
            );
            return Ok(Some(token));
        }
    }

    /// Scans the whole source into an ordered token sequence.
    ///
    /// The first error aborts the scan.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }

        debug!(
            tokens = tokens.len(),
            bytes = self.cursor.position(),
            "scan complete"
        );
        Ok(tokens)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Marks the cursor position as the start of a new token.
    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token covering everything consumed since `start_token`.
    pub(crate) fn make_token(&self, category: Category, text: impl Into<String>) -> Token {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::with_span(category, text, span)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            },
        }
    }
}
