use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Span};

/// A single parse diagnostic: what went wrong and where.
///
/// `Display` yields exactly the diagnostic text, so consumers that match on
/// the message strings can rely on `to_string()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingPrefixRule { .. } => "MissingPrefixRule",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedBlock => "UnterminatedBlock",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => match expected {
                TokenKind::Identifier => {
                    ErrorTip::Suggestion(String::from("expected a name here"))
                }
                TokenKind::CloseParen => {
                    ErrorTip::Suggestion(String::from("is a `)` missing?"))
                }
                _ => ErrorTip::None,
            },
            ErrorImpl::MissingPrefixRule { found } if *found == TokenKind::Illegal => {
                ErrorTip::Suggestion(String::from("this character is not part of the language"))
            }
            ErrorImpl::MissingPrefixRule { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { .. } => ErrorTip::Suggestion(String::from(
                "integers must fit in a signed 64-bit value",
            )),
            ErrorImpl::UnterminatedBlock => {
                ErrorTip::Suggestion(String::from("is a closing `}` missing?"))
            }
            ErrorImpl::NestingTooDeep { .. } => {
                ErrorTip::Suggestion(String::from("split the expression with `let` bindings"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {found} found")]
    MissingPrefixRule { found: TokenKind },
    #[error("could not parse {literal} as integer")]
    NumberParseError { literal: String },
    #[error("unexpected end of input, expected }}")]
    UnterminatedBlock,
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
