use castellano::interpreter::lexer::{Lexer, Position, TokenKind, tokenize};
use TokenKind::*;

#[test]
fn grouped_arithmetic() {
    assert_eq!(tokenize("(25+7)-resultado."),
               vec![LParen, Int, Plus, Int, RParen, Minus, Ident, Point, Eof]);
}

#[test]
fn assignment_with_latin_identifiers() {
    assert_eq!(tokenize("súperVariableLargaYLatina := acc + (5-a)"),
               vec![Ident, Assign, Ident, Plus, LParen, Int, Minus, Ident, RParen, Eof]);
}

#[test]
fn conditional_over_several_lines() {
    assert_eq!(tokenize("si verdadero \n{a:=5+1.}"),
               vec![If, True, LBrace, Ident, Assign, Int, Plus, Int, Point, RBrace, Eof]);
}

#[test]
fn reserved_words() {
    assert_eq!(tokenize("para todo {hacer {a := (a o falso) y verdadero.} mientras seMantieneEstaCondición.}"),
               vec![For, Ident, LBrace, Do, LBrace, Ident, Assign, LParen, Ident, Or, False,
                    RParen, And, True, Point, RBrace, While, Ident, Point, RBrace, Eof]);

    assert_eq!(tokenize("sino entonces función no si"),
               vec![Else, Then, Function, Not, If, Eof]);
}

#[test]
fn keywords_only_match_whole_words() {
    assert_eq!(tokenize("sinos nox verdaderos funcion _si yo"),
               vec![Ident, Ident, Ident, Ident, Ident, Ident, Eof]);
}

#[test]
fn operators_and_punctuation() {
    assert_eq!(tokenize("+-*/= := ( ) { } . ;"),
               vec![Plus, Minus, Multiplication, Division, Equals, Assign, LParen, RParen,
                    LBrace, RBrace, Point, Semicolon, Eof]);
}

#[test]
fn digits_followed_by_letters_split() {
    assert_eq!(tokenize("1a"), vec![Int, Ident, Eof]);
    assert_eq!(tokenize("h0la"), vec![Ident, Eof]);
}

#[test]
fn unknown_characters_are_illegal() {
    assert_eq!(tokenize("a , b : c # d ?"),
               vec![Ident, Illegal, Ident, Illegal, Ident, Illegal, Ident, Illegal, Eof]);
}

#[test]
fn whitespace_only_source() {
    assert_eq!(tokenize(""), vec![Eof]);
    assert_eq!(tokenize(" \t\n\n  "), vec![Eof]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("5");
    assert_eq!(lexer.next_token().kind, Int);
    for _ in 0..4 {
        let token = lexer.next_token();
        assert_eq!(token.kind, Eof);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn literals_and_columns() {
    let tokens: Vec<_> = Lexer::new("a := 25").collect();

    let literals: Vec<_> = tokens.iter().map(|t| t.literal).collect();
    assert_eq!(literals, vec!["a", ":=", "25"]);

    let columns: Vec<_> = tokens.iter().map(|t| t.column).collect();
    assert_eq!(columns, vec![0, 2, 5]);
    assert!(tokens.iter().all(|t| t.line == 1));
}

#[test]
fn columns_count_characters() {
    let tokens: Vec<_> = Lexer::new("número := 1").collect();
    assert_eq!(tokens[1].kind, Assign);
    assert_eq!(tokens[1].column, 7);
}

#[test]
fn columns_on_long_lines() {
    let source = "ñ ".repeat(10_000) + "\n  a";
    let tokens: Vec<_> = Lexer::new(&source).collect();

    assert_eq!(tokens.len(), 10_001);
    assert_eq!(tokens[9_999].position(), Position { line: 1, column: 19_998 });
    assert_eq!(tokens[10_000].position(), Position { line: 2, column: 2 });
}

#[test]
fn lines_advance_on_newlines() {
    let tokens: Vec<_> = Lexer::new("a\n  b\n\nc").collect();
    let positions: Vec<_> = tokens.iter().map(|t| t.position()).collect();

    assert_eq!(positions,
               vec![Position { line: 1, column: 0 },
                    Position { line: 2, column: 2 },
                    Position { line: 4, column: 0 }]);
}

#[test]
fn iterator_stops_before_end_of_input() {
    assert_eq!(Lexer::new("1 + 2").count(), 3);
    assert_eq!(Lexer::new("").count(), 0);
}

#[test]
fn kinds_display_in_upper_case() {
    assert_eq!(Ident.to_string(), "IDENT");
    assert_eq!(Assign.to_string(), "ASSIGN");
    assert_eq!(Eof.to_string(), "EOF");
}
