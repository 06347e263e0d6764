//! Edge case tests for lexc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Category, LexicalError, Token};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
    }

    fn categories(source: &str) -> Vec<Category> {
        lex_all(source).iter().map(Token::category).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert!(t[0].is(Category::Identifier, "x"));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("int {} = 1;", name));
        assert!(t[1].is(Category::Identifier, &name));
    }

    #[test]
    fn test_edge_leading_underscore_is_symbol() {
        let t = lex_all("_tmp");
        assert!(t[0].is(Category::Symbol, "_"));
        assert!(t[1].is(Category::Identifier, "tmp"));
    }

    #[test]
    fn test_edge_digit_then_letters() {
        let t = lex_all("2x");
        assert!(t[0].is(Category::Integer, "2"));
        assert!(t[1].is(Category::Identifier, "x"));
    }

    #[test]
    fn test_edge_leading_dot_is_symbol() {
        let t = lex_all(".5");
        assert!(t[0].is(Category::Symbol, "."));
        assert!(t[1].is(Category::Integer, "5"));
    }

    #[test]
    fn test_edge_version_like_number() {
        let t = lex_all("3.14.15");
        assert_eq!(t.len(), 1);
        assert!(t[0].is(Category::Decimal, "3.14.15"));
    }

    #[test]
    fn test_edge_operators_not_grouped() {
        assert_eq!(
            lex_all("==").iter().map(Token::text).collect::<Vec<_>>(),
            vec!["=", "="]
        );
        assert_eq!(categories("&&||->"), vec![Category::Symbol; 6]);
    }

    #[test]
    fn test_edge_slash_alone_is_symbol() {
        let t = lex_all("a / b");
        assert!(t[1].is(Category::Symbol, "/"));
    }

    #[test]
    fn test_edge_slash_equals() {
        let t = lex_all("x /= 2");
        assert!(t[1].is(Category::Symbol, "/"));
        assert!(t[2].is(Category::Symbol, "="));
    }

    #[test]
    fn test_edge_four_slashes_is_doc_comment() {
        let t = lex_all("//// banner");
        assert_eq!(t.len(), 1);
        assert!(t[0].is(Category::DocComment, "//// banner"));
    }

    #[test]
    fn test_edge_comment_newline_not_emitted() {
        let t = lex_all("/// doc\n// line\nx");
        assert_eq!(t.len(), 3);
        assert!(t[0].is(Category::DocComment, "/// doc"));
        assert!(t[1].is(Category::LineComment, "// line"));
        assert!(t[2].is(Category::Identifier, "x"));
    }

    #[test]
    fn test_edge_crlf_line_comment_keeps_carriage_return() {
        let t = lex_all("// hi\r\nx");
        assert!(t[0].is(Category::LineComment, "// hi\r"));
        assert!(t[1].is(Category::Identifier, "x"));
    }

    #[test]
    fn test_edge_block_comment_slash_star_inside_line() {
        let t = lex_all("a/*b*/c");
        assert!(t[0].is(Category::Identifier, "a"));
        assert!(t[1].is(Category::BlockComment, "/*b*/"));
        assert!(t[2].is(Category::Identifier, "c"));
    }

    #[test]
    fn test_edge_slash_star_inside_line_comment() {
        let t = lex_all("// see /* here\nx");
        assert_eq!(t.len(), 2);
        assert!(t[0].is(Category::LineComment, "// see /* here"));
    }

    #[test]
    fn test_edge_comment_markers_inside_string() {
        let t = lex_all("\"// not a comment\"");
        assert_eq!(t.len(), 1);
        assert!(t[0].is(Category::StringLiteral, "// not a comment"));
    }

    #[test]
    fn test_edge_empty_string() {
        let t = lex_all("\"\"");
        assert!(t[0].is(Category::StringLiteral, ""));
    }

    #[test]
    fn test_edge_unterminated_string_swallows_rest() {
        let t = lex_all("s = \"abc; int y;");
        assert_eq!(t.len(), 3);
        assert!(t[2].is(Category::StringLiteral, "abc; int y;"));
    }

    #[test]
    fn test_edge_char_then_symbol() {
        let t = lex_all("c=='a'");
        assert!(t[3].is(Category::CharLiteral, "a"));
    }

    #[test]
    fn test_edge_space_char_literal() {
        let t = lex_all("' '");
        assert!(t[0].is(Category::CharLiteral, " "));
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Int int");
        assert!(t[0].is(Category::Identifier, "Int"));
        assert!(t[1].is(Category::Keyword, "int"));
    }

    #[test]
    fn test_edge_unicode_symbol() {
        let t = lex_all("a → b");
        assert!(t[1].is(Category::Symbol, "→"));
    }

    #[test]
    fn test_edge_non_breaking_space_is_whitespace() {
        assert_eq!(lex_all("a\u{00A0}b").len(), 2);
    }

    #[test]
    fn test_edge_unicode_digit_is_integer() {
        let t = lex_all("٣");
        assert_eq!(t.len(), 1);
        assert!(t[0].is(Category::Integer, "٣"));
    }

    #[test]
    fn test_edge_unicode_digits_in_decimal() {
        let t = lex_all("١٢.٥");
        assert_eq!(t.len(), 1);
        assert!(t[0].is(Category::Decimal, "١٢.٥"));
    }

    #[test]
    fn test_edge_superscript_ends_identifier() {
        let t = lex_all("x²");
        assert_eq!(t.len(), 2);
        assert!(t[0].is(Category::Identifier, "x"));
        assert!(t[1].is(Category::Symbol, "²"));
    }

    #[test]
    fn test_edge_letter_number_is_symbol() {
        let t = lex_all("Ⅻ");
        assert_eq!(t.len(), 1);
        assert!(t[0].is(Category::Symbol, "Ⅻ"));
    }

    #[test]
    fn test_edge_unicode_digit_continues_identifier() {
        let t = lex_all("x٣ y");
        assert!(t[0].is(Category::Identifier, "x٣"));
        assert!(t[1].is(Category::Identifier, "y"));
    }

    #[test]
    fn test_edge_nul_character_is_symbol() {
        let t = lex_all("a\0b");
        assert_eq!(t.len(), 3);
        assert!(t[1].is(Category::Symbol, "\0"));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_char() {
        assert!(matches!(
            tokenize("'x"),
            Err(LexicalError::UnterminatedChar { .. })
        ));
    }

    #[test]
    fn test_err_lone_quote() {
        assert!(matches!(
            tokenize("x = '"),
            Err(LexicalError::UnterminatedChar { line: 1, column: 5 })
        ));
    }

    #[test]
    fn test_err_escaped_quote_char() {
        assert!(tokenize(r"'\''").is_err());
    }

    #[test]
    fn test_err_position_on_later_line() {
        let err = tokenize("int a;\n  char b = 'bc';").unwrap_err();
        assert_eq!((err.line(), err.column()), (2, 12));
    }

    #[test]
    fn test_err_long_string_after_valid_tokens() {
        let source = format!("x = \"{}\";", "y".repeat(150));
        assert!(matches!(
            tokenize(&source),
            Err(LexicalError::StringTooLong { length: 150, max: 100, .. })
        ));
    }

    #[test]
    fn test_err_long_unterminated_string() {
        let source = format!("\"{}", "y".repeat(101));
        assert!(tokenize(&source).is_err());
    }

    #[test]
    fn test_tolerated_inputs_do_not_error() {
        assert!(tokenize("/* open").is_ok());
        assert!(tokenize("\"open").is_ok());
        assert!(tokenize("1.2.3.4").is_ok());
        assert!(tokenize("@#$`~").is_ok());
    }
}
