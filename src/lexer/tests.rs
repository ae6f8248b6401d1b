//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - One- and two-character operators
//! - Delimiters
//! - Illegal characters and end-of-input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};
use crate::Span;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = tokenize("=+(){},;");
    let expected = [
        (TokenKind::Assignment, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::OpenParen, "("),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_keywords_are_case_sensitive() {
    let tokens = tokenize("Let FN True iff returns");

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier, "{}", token.literal);
    }
    assert_eq!(tokens[3].literal, "iff");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar _underscore CamelCase snake_case");

    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].literal, "bar");
    assert_eq!(tokens[2].literal, "_underscore");
    assert_eq!(tokens[3].literal, "CamelCase");
    assert_eq!(tokens[4].literal, "snake_case");
    assert!(tokens[..5].iter().all(|token| token.is(TokenKind::Identifier)));
}

#[test]
fn test_digits_end_an_identifier() {
    let tokens = tokenize("x1");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "x");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].literal, "1");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("5 10 838383 0");

    assert_eq!(tokens[0].literal, "5");
    assert_eq!(tokens[1].literal, "10");
    assert_eq!(tokens[2].literal, "838383");
    assert_eq!(tokens[3].literal, "0");
    assert!(tokens[..4].iter().all(|token| token.is(TokenKind::Number)));
}

#[test]
fn test_no_float_or_signed_literals() {
    assert_eq!(
        kinds("3.14 -7"),
        vec![
            TokenKind::Number,
            TokenKind::Illegal,
            TokenKind::Number,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("!-/*5; 5 < 10 > 5;"),
        vec![
            TokenKind::Not,
            TokenKind::Dash,
            TokenKind::Slash,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Number,
            TokenKind::Less,
            TokenKind::Number,
            TokenKind::Greater,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_two_character_operators() {
    let tokens = tokenize("10 == 10; 10 != 9;");

    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[1].literal, "==");
    assert_eq!(tokens[5].kind, TokenKind::NotEquals);
    assert_eq!(tokens[5].literal, "!=");
}

#[test]
fn test_split_two_character_operators() {
    assert_eq!(
        kinds("= = ! = =!"),
        vec![
            TokenKind::Assignment,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::Assignment,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        kinds("=+"),
        vec![TokenKind::Assignment, TokenKind::Plus, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("let five = 5;\nlet add = fn(x, y) {\n\tx + y;\r\n};");

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Fn,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].literal, "five");
    assert_eq!(tokens[6].literal, "add");
}

#[test]
fn test_tokenize_illegal_character() {
    let tokens = tokenize("let x = @ 5");

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "@");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_multibyte_character() {
    let tokens = tokenize("a\u{e9}b");

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "\u{e9}");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].literal, "b");
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_empty_and_blank_sources() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \t\r\n "), vec![TokenKind::EOF]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("  let ab == 7");

    assert_eq!(tokens[0].span, Span::new(2, 5));
    assert_eq!(tokens[1].span, Span::new(6, 8));
    assert_eq!(tokens[2].span, Span::new(9, 11));
    assert_eq!(tokens[3].span, Span::new(12, 13));
    assert_eq!(tokens[4].span, Span::new(13, 13));
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let literals: Vec<String> = Lexer::new("a + 1").map(|token| token.literal).collect();

    assert_eq!(literals, vec!["a", "+", "1"]);
}

#[test]
fn test_offset_tracks_consumed_input() {
    let mut lexer = Lexer::new("let ab = é;");
    assert_eq!(lexer.offset(), 0);

    lexer.next_token();
    assert_eq!(lexer.offset(), 3);

    let rest: Vec<TokenKind> = lexer.by_ref().map(|token| token.kind).collect();
    assert_eq!(
        rest,
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Illegal,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(lexer.offset(), "let ab = é;".len());
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Number.to_string(), "INT");
    assert_eq!(TokenKind::Assignment.to_string(), "=");
    assert_eq!(TokenKind::NotEquals.to_string(), "!=");
    assert_eq!(TokenKind::Fn.to_string(), "FUNCTION");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}
