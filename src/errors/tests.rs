//! Unit tests for error handling.
//!
//! This module contains tests for error names, messages and tips.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Span;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::MissingPrefixRule {
            found: TokenKind::Illegal,
        },
        Span::new(4, 5),
    );

    assert_eq!(error.get_error_name(), "MissingPrefixRule");
    assert_eq!(error.get_span(), Span::new(4, 5));
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Assignment,
        },
        Span::new(4, 5),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be IDENT, got = instead"
    );
}

#[test]
fn test_missing_prefix_rule_message() {
    let error = Error::new(
        ErrorImpl::MissingPrefixRule {
            found: TokenKind::Semicolon,
        },
        Span::default(),
    );

    assert_eq!(error.to_string(), "no prefix parse function for ; found");
}

#[test]
fn test_number_parse_error_message() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            literal: "99999999999999999999".to_string(),
        },
        Span::default(),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(
        error.to_string(),
        "could not parse 99999999999999999999 as integer"
    );
}

#[test]
fn test_unterminated_block_message() {
    let error = Error::new(ErrorImpl::UnterminatedBlock, Span::default());

    assert_eq!(error.to_string(), "unexpected end of input, expected }");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::MissingPrefixRule {
            found: TokenKind::CloseCurly,
        },
        Span::default(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MissingPrefixRule {
            found: TokenKind::Illegal,
        },
        Span::default(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, Span::new(128, 129));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nested deeper than 128 levels");
    assert_eq!(
        error.get_tip().to_string(),
        "split the expression with `let` bindings"
    );
}
