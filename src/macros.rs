//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for operators and delimiters.
///
/// Generates a handler function that turns the matched text into a token
/// of the given kind and advances the lexer past it.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            let start = lexer.offset();
            lexer.advance_n(matched.len());
            MK_TOKEN!(
                $kind,
                String::from(matched),
                Span::new(start, lexer.offset())
            )
        }
    };
}
