//! Token definitions.
//!
//! A [`Token`] is an immutable pair of a [`Category`] and the text that was
//! consumed for it, plus the [`Span`] it was read from.

use std::fmt;

/// The lexical category of a token.
///
/// The set is closed: every token produced by the lexer falls into exactly
/// one of these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// A reserved word from the configured keyword set.
    Keyword,
    /// A name that is not a keyword.
    Identifier,
    /// A run of digits without a decimal point.
    Integer,
    /// A run of digits and at least one `.`.
    Decimal,
    /// A double-quoted string, quotes stripped.
    StringLiteral,
    /// A single-quoted character, quotes stripped.
    CharLiteral,
    /// A `//` comment.
    LineComment,
    /// A `///` comment.
    DocComment,
    /// A `/* */` comment.
    BlockComment,
    /// Any single character not claimed by another reader.
    Symbol,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 10] = [
        Category::Keyword,
        Category::Identifier,
        Category::Integer,
        Category::Decimal,
        Category::StringLiteral,
        Category::CharLiteral,
        Category::LineComment,
        Category::DocComment,
        Category::BlockComment,
        Category::Symbol,
    ];

    /// Returns the display name of the category.
    pub fn name(self) -> &'static str {
        match self {
            Category::Keyword => "Keyword",
            Category::Identifier => "Identifier",
            Category::Integer => "Integer",
            Category::Decimal => "Decimal",
            Category::StringLiteral => "StringLiteral",
            Category::CharLiteral => "CharLiteral",
            Category::LineComment => "LineComment",
            Category::DocComment => "DocComment",
            Category::BlockComment => "BlockComment",
            Category::Symbol => "Symbol",
        }
    }

    /// Returns true for the three comment categories.
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Category::LineComment | Category::DocComment | Category::BlockComment
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source location of a token.
///
/// `start..end` is the byte range of everything the reader consumed,
/// including quotes and comment delimiters. `line` and `column` locate the
/// first consumed character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A classified piece of source text.
///
/// # Example
///
/// ```
/// use lexc_lex::{Category, Token};
///
/// let token = Token::new(Category::Keyword, "int");
/// assert_eq!(token.to_string(), "[Category: Keyword, Content: int]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    category: Category,
    text: String,
    span: Span,
}

impl Token {
    /// Creates a token with a default span.
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self::with_span(category, text, Span::default())
    }

    /// Creates a token read from `span`.
    pub fn with_span(category: Category, text: impl Into<String>, span: Span) -> Self {
        Self {
            category,
            text: text.into(),
            span,
        }
    }

    /// The lexical category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The token content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the token was read from.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true if this token has `category` and `text`, ignoring the span.
    pub fn is(&self, category: Category, text: &str) -> bool {
        self.category == category && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Category: {}, Content: {}]", self.category, self.text)
    }
}
