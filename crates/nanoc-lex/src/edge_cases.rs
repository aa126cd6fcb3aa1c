//! Property-based tests for the lexer totality invariant (spec.md §8):
//! for any input string, repeated `next_token` calls terminate in an
//! infinite tail of `Eof`, and no call ever panics.

use crate::lexer::Lexer;
use crate::token::Token;
use proptest::prelude::*;

proptest! {
    #[test]
    fn never_panics_on_arbitrary_input(source in ".*") {
        let mut lexer = Lexer::new(&source);
        let mut saw_eof = false;
        for _ in 0..source.chars().count() + 4 {
            let tok = lexer.next_token();
            if tok.token.is_eof() {
                saw_eof = true;
                break;
            }
        }
        prop_assert!(saw_eof || source.is_empty());
    }

    #[test]
    fn eof_is_sticky(source in "[ -~]{0,64}") {
        let mut lexer = Lexer::new(&source);
        loop {
            if lexer.next_token().token.is_eof() {
                break;
            }
        }
        for _ in 0..10 {
            prop_assert_eq!(lexer.next_token().token, Token::Eof);
        }
    }

    #[test]
    fn no_token_span_crosses_a_newline_for_single_line_sources(
        source in "[A-Za-z0-9_ ]{0,40}"
    ) {
        let tokens = Lexer::new(&source).tokenize_all();
        prop_assert!(tokens.iter().all(|t| t.span.line == 1));
    }
}
