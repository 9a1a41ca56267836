//! Integration tests for the lexer

use schemata_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

// =============================================================================
// References
// =============================================================================

#[test]
fn lex_globals_radicals_and_locals() {
    assert_eq!(
        kinds("F1[R2, α]"),
        vec![
            TokenKind::Global("F1".into()),
            TokenKind::LBracket,
            TokenKind::Radical("R2".into()),
            TokenKind::Comma,
            TokenKind::Local("α".into()),
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn adjacent_globals_split() {
    assert_eq!(
        kinds("X1X2"),
        vec![
            TokenKind::Global("X1".into()),
            TokenKind::Global("X2".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn indexed_functions_are_not_globals() {
    assert_eq!(
        kinds("Pr1,2(S1)")[0],
        TokenKind::Function("Pr1,2".into())
    );
    assert_eq!(kinds("pr1(S1)")[0], TokenKind::Function("pr1".into()));
}

// =============================================================================
// Operators and Blocks
// =============================================================================

#[test]
fn lex_blocks_and_assignments() {
    assert_eq!(
        kinds("I{a:∈X1; b:=a}"),
        vec![
            TokenKind::Imperative,
            TokenKind::Local("a".into()),
            TokenKind::Iterate,
            TokenKind::Global("X1".into()),
            TokenKind::Semicolon,
            TokenKind::Local("b".into()),
            TokenKind::Assign,
            TokenKind::Local("a".into()),
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unknown_characters_are_errors() {
    let tokens = Lexer::tokenize_all("X1 @");
    assert!(matches!(tokens[1].kind, TokenKind::Error(_)));
    assert_eq!(tokens[1].span.position, 3);
}

#[test]
fn spans_are_byte_ranges() {
    let source = "ℬ(X1)";
    let tokens = Lexer::tokenize_all(source);
    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[2].text(source), "X1");
    assert_eq!(tokens[2].span.position, 2);
}
