//! Number literal lexing.

use crate::token::{Category, Token};
use crate::unicode;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Consumes the longest run of decimal digits and `.` characters. The
    /// literal is `Decimal` if it contains any `.` and `Integer` otherwise.
    /// Well-formedness is left to later stages: `1.2.3` and `7.` are both
    /// accepted as a single `Decimal`.
    pub fn lex_number(&mut self) -> Token {
        let mut is_decimal = false;
        self.cursor.eat_while(|c| {
            if c == '.' {
                is_decimal = true;
                return true;
            }
            unicode::is_decimal_digit(c)
        });

        let category = if is_decimal {
            Category::Decimal
        } else {
            Category::Integer
        };

        let text = self.cursor.slice_from(self.token_start);
        self.make_token(category, text)
    }
}
