//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, integers and operators
//! - Byte spans on every token for error reporting
//! - Illegal characters, which become tokens rather than errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
