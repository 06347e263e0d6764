//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which holds the single
//! forward-only scan position over the source text. It handles UTF-8
//! encoding correctly and tracks line/column information for spans and
//! error reporting.

/// Sentinel returned when looking at or past the end of the source.
pub const EOF_CHAR: char = '\0';

/// A forward-only cursor over source text.
///
/// The cursor only ever moves forward: there is no way to rewind it, so a
/// character that has been consumed is never re-read by a later token.
///
/// # Example
///
/// ```
/// use lexc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
#[derive(Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or [`EOF_CHAR`] at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the cursor
    /// without consuming anything.
    ///
    /// Peeking past the end of the source yields [`EOF_CHAR`].
    ///
    /// # Example
    ///
    /// ```
    /// use lexc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("/*");
    /// assert_eq!(cursor.peek_char(0), '/');
    /// assert_eq!(cursor.peek_char(1), '*');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path: an ASCII run covers the whole lookahead window
        let bytes = rest.as_bytes();
        if offset < bytes.len() && bytes[..=offset].is_ascii() {
            return bytes[offset] as char;
        }

        rest.chars().nth(offset).unwrap_or(EOF_CHAR)
    }

    /// Consumes the current character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes up to `count` characters, stopping early at the end.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Consumes characters while `predicate` holds for the current one.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between byte `start` and the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use lexc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("while (1)");
    /// let start = cursor.position();
    /// cursor.advance_n(5);
    /// assert_eq!(cursor.slice_from(start), "while");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed remainder of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
