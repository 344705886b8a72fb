//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - The `while` keyword and identifiers
//! - Numbers and fixed-literal punctuation
//! - The `$` terminator
//! - Error cases and the partial token stream

use super::{
    lexer::{lex, tokenize},
    tokens::TokenKind,
};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.prog".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("{ } ; := # ! &"),
        vec![
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Semicolon,
            TokenKind::Assign,
            TokenKind::Hash,
            TokenKind::Not,
            TokenKind::Ampersand,
            TokenKind::EndMarker,
        ]
    );
}

#[test]
fn test_tokenize_identifiers_and_numbers() {
    let source = "foo x1 007 CamelCase 42".to_string();
    let tokens = tokenize(source, Some("test.prog".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x1");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "007");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].value, "42");
    assert_eq!(tokens[5].kind, TokenKind::EndMarker);
}

#[test]
fn test_tokenize_number_then_identifier() {
    let tokens = tokenize("12ab".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "ab");
}

#[test]
fn test_tokenize_while_keyword() {
    let tokens = tokenize("while a{".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::While);
    assert_eq!(tokens[0].value, "while");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::LeftBrace);
}

#[test]
fn test_tokenize_while_needs_boundary() {
    let tokens = tokenize("whilex while1 while{".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "whilex");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "while1");
    assert_eq!(tokens[2].kind, TokenKind::While);
    assert_eq!(tokens[3].kind, TokenKind::LeftBrace);
}

#[test]
fn test_tokenize_whitespace() {
    assert_eq!(
        kinds(" \t{\r\n a:=1 }\n"),
        kinds("{a:=1}"),
    );
}

#[test]
fn test_tokenize_end_to_end_example() {
    let tokens = tokenize("{while a{b:=1}}".to_string(), None).unwrap();
    let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();

    assert_eq!(
        rendered,
        vec![
            "LeftBrace",
            "While",
            "Identifier(a)",
            "LeftBrace",
            "Identifier(b)",
            "Assign",
            "Number(1)",
            "RightBrace",
            "RightBrace",
            "EndMarker",
        ]
    );
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("{ ab:=12}".to_string(), None).unwrap();

    assert_eq!(tokens[1].span.start.0, 2);
    assert_eq!(tokens[1].span.end.0, 4);
    assert_eq!(tokens[2].span.start.0, 4);
    assert_eq!(tokens[2].span.end.0, 6);
    assert_eq!(tokens[3].span.start.0, 6);
    assert_eq!(tokens[5].span.start.0, 9);
}

#[test]
fn test_tokenize_dollar_terminates() {
    let tokens = tokenize("{a:=1}$ trailing ?".to_string(), None).unwrap();

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[5].kind, TokenKind::EndMarker);
    assert_eq!(tokens[5].value, "$");
    assert_eq!(tokens[5].span.start.0, 6);
}

#[test]
fn test_tokenize_empty_input() {
    assert_eq!(kinds(""), vec![TokenKind::EndMarker]);
    assert_eq!(kinds("   "), vec![TokenKind::EndMarker]);
}

#[test]
fn test_tokenize_is_repeatable() {
    let source = "{a:=b#c&!1;while x{y:=2}}";
    let first = tokenize(source.to_string(), None).unwrap();
    let second = tokenize(source.to_string(), None).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_tokenize_unknown_character() {
    let error = tokenize("{a:=1+2}".to_string(), None).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::LexicalError { character: '+' });
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_tokenize_colon_without_equals() {
    let error = tokenize("a:b".to_string(), None).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::LexicalError { character: 'b' });
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_tokenize_colon_at_end_of_input() {
    let error = tokenize("{a:".to_string(), None).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::LexicalError { character: ':' });
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_lex_returns_partial_stream() {
    let (tokens, error) = lex("{a:=1 @ b}".to_string(), Some("test.prog".to_string()));

    let error = error.expect("lexing should fail");
    assert_eq!(error.get_position().0, 6);
    assert_eq!(error.get_position().1.as_str(), "test.prog");

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBrace,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::ErrorToken,
        ]
    );
    assert_eq!(tokens[4].value, "@");
}

#[test]
fn test_lex_default_file_name() {
    let (tokens, error) = lex("{".to_string(), None);

    assert!(error.is_none());
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}
