//! Integration tests for end-to-end recognition.
//!
//! These tests run candidate programs through tokenization and the
//! precedence parser, the way the command-line driver does.

use precedence::{
    errors::errors::ErrorImpl,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::{
        parser::{parse, Action},
        symbols::Symbol,
    },
    recognize, render_error,
};
use std::rc::Rc;

#[test]
fn test_recognize_nested_program() {
    let trace = recognize("{a:=1;{b:=2}}", None).unwrap();
    assert_eq!(trace.last(), Some(&Action::Accept));
}

#[test]
fn test_recognize_end_to_end_example() {
    let source = "{while a{b:=1}}";
    let tokens = tokenize(source.to_string(), Some("example.prog".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBrace,
            TokenKind::While,
            TokenKind::Identifier,
            TokenKind::LeftBrace,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::RightBrace,
            TokenKind::RightBrace,
            TokenKind::EndMarker,
        ]
    );
    assert_eq!(tokens[2].value, "a");
    assert_eq!(tokens[4].value, "b");
    assert_eq!(tokens[6].value, "1");

    let (_, result) = parse(tokens, Rc::new("example.prog".to_string()));
    assert!(result.is_ok());
}

#[test]
fn test_recognize_lexical_error() {
    let error = recognize("a:b", None).unwrap_err();

    assert!(error.is_lexical());
    assert_eq!(error.get_kind(), &ErrorImpl::LexicalError { character: 'b' });
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_recognize_structural_error_terminates() {
    let error = recognize("{a:=1;}", Some("programs.txt".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedSymbol");
    assert_eq!(error.get_position().1.as_str(), "programs.txt");
}

#[test]
fn test_recognize_while_prefix_identifier() {
    // `whilex` is an identifier, so this is an ordinary assignment.
    assert!(recognize("{whilex:=1}", None).is_ok());
    assert!(recognize("{while x{y:=1}}", None).is_ok());
}

#[test]
fn test_recognize_multiline_program() {
    let source = "{\n  a := 1;\n  while a {\n    b := a # 1\n  }\n}";
    assert!(recognize(source, None).is_ok());
}

#[test]
fn test_render_error_on_second_line() {
    let source = "{a:=1;\n b:=;}";
    let error = recognize(source, Some("multi.prog".to_string())).unwrap_err();
    let rendered = render_error(&error, source);

    assert_eq!(
        rendered,
        "Error: UnexpectedSymbol (`Semicolon` cannot follow `Assign`)\n\
         -> multi.prog\n  |\n\
         2 | b:=;}\n  \
         | ---^\n"
    );
}

#[test]
fn test_shift_reduce_trace_mentions_every_token() {
    let trace = recognize("{a:=b#c}", None).unwrap();

    let shifted_terminals = trace
        .iter()
        .filter(|action| {
            matches!(
                action,
                Action::Shift {
                    symbol: Symbol::Terminal(_),
                    ..
                }
            )
        })
        .count();

    // `{ a := b # c }`; identifiers are shifted as terminals before reduction
    assert_eq!(shifted_terminals, 7);
}
