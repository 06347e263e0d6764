//! Unicode character classes for the lexer.
//!
//! Classification is by Unicode general category, so letter-like numbers
//! (`Ⅻ`, category Nl) and superscripts (`²`, category No) are neither
//! letters nor digits, while any decimal digit (`٣`, category Nd) is a digit.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Checks if a character is a letter (categories Lu, Ll, Lt, Lm, Lo).
///
/// Letters start identifiers.
///
/// # Example
///
/// ```
/// use lexc_lex::unicode::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('ñ'));
/// assert!(is_letter('α'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('Ⅻ'));
/// ```
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Checks if a character is a decimal digit (category Nd).
///
/// # Example
///
/// ```
/// use lexc_lex::unicode::is_decimal_digit;
///
/// assert!(is_decimal_digit('7'));
/// assert!(is_decimal_digit('٣'));
/// assert!(!is_decimal_digit('²'));
/// ```
pub fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Checks if a character can continue an identifier: a letter, a decimal
/// digit or `_`.
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || is_letter(c) || is_decimal_digit(c)
}

/// Checks if `word` has the shape of an identifier, and so could ever be
/// produced as a keyword.
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(is_letter) && chars.all(is_ident_continue)
}
