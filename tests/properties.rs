//! Property-based tests for the lexer, parser and evaluator.
//!
//! 1. **Lexing is total**: any input produces tokens ending in a single `EOF`,
//!    and `EOF` repeats once the input is exhausted.
//! 2. **Keywords are whole words**: a word is a keyword exactly when it is
//!    reserved, otherwise an identifier.
//! 3. **Precedence**: `*` binds tighter than `+`, which binds tighter than `=`.
//! 4. **Integers print back as written**, including `i64::MIN`.
//! 5. **Binding a value does not change it.**
//! 6. **Counting loops terminate** with the expected sum.

use castellano::{
    evaluate_to_string, interpret,
    interpreter::{
        lexer::{Lexer, TokenKind, keyword, tokenize},
        parser::Parser,
    },
};
use proptest::prelude::*;

fn arithmetic_operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(&["+", "-", "*"][..])
}

proptest! {
    #[test]
    fn lexing_is_total(input in "\\PC{0,200}") {
        let kinds = tokenize(&input);
        prop_assert_eq!(kinds.last(), Some(&TokenKind::Eof));
        prop_assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Eof).count(), 1);

        let mut lexer = Lexer::new(&input);
        for _ in 0..kinds.len() {
            lexer.next_token();
        }
        for _ in 0..3 {
            prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }
    }

    #[test]
    fn parsing_never_panics(input in "\\PC{0,200}") {
        let _program = Parser::new(Lexer::new(&input)).parse_program();
    }

    #[test]
    fn words_are_keywords_or_identifiers(word in "[a-zA-Z_áéíóúñ][a-zA-Z0-9_áéíóúñ]{0,10}") {
        let expected = keyword(&word).unwrap_or(TokenKind::Ident);
        prop_assert_eq!(tokenize(&word), vec![expected, TokenKind::Eof]);
    }

    #[test]
    fn product_binds_tighter_than_sum_and_equality(a in 0..1000i64,
                                                   b in 0..1000i64,
                                                   c in 0..1000i64,
                                                   d in 0..1000i64) {
        let source = format!("{a} + {b} * {c} = {d}");
        let mut parser = Parser::new(Lexer::new(&source));
        let program = parser.parse_program();

        prop_assert!(parser.error().is_none());
        prop_assert_eq!(program.forms.len(), 1);
        prop_assert_eq!(program.forms[0].to_string(), format!("(({a} + ({b} * {c})) = {d})"));
    }

    #[test]
    fn integers_print_as_written(n in any::<i64>()) {
        let source = n.to_string();
        prop_assert_eq!(evaluate_to_string(&source), Some(source));
    }

    #[test]
    fn binding_preserves_values(a in 0..10_000i64,
                                b in 0..10_000i64,
                                op in arithmetic_operator()) {
        let direct = interpret(&format!("{a} {op} {b}"));
        let bound = interpret(&format!("x := {a} {op} {b}. x"));

        prop_assert!(direct.is_clean());
        prop_assert_eq!(direct.output, bound.output);
    }

    #[test]
    fn counting_loops_terminate(n in 0..50i64) {
        let source = format!("i := 0. s := 0. mientras no (i = {n}) {{i := i + 1. s := s + i. s}}");
        let expected = (n > 0).then(|| (n * (n + 1) / 2).to_string());

        prop_assert_eq!(evaluate_to_string(&source), expected);
    }
}
