//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser struct and the program-level loop.
//! The parser reads from a [`Lexer`] through a two-token window
//! (`current` and `peek`) and dispatches to the statement and expression
//! rules in `stmt` and `expr`.
//!
//! Malformed input never aborts a parse. Each rule returns a `Result`; the
//! statement loops record the error, skip to the next statement boundary
//! and carry on, so one parse reports every independent problem.

use std::mem;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted before the parser gives up on a
/// statement. Each operand level and each operator in a chain counts once.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer it reads from, the lookahead window and the
/// diagnostics collected so far. A parser is single-use: build a new one for
/// every source text.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token being examined
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Expression levels currently open
    nesting: usize,
}

impl Parser {
    /// Creates a new Parser and primes the lookahead window with two tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
            nesting: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Returns the binding power of the lookahead token as an infix operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Advances to the next token and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let current = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, current)
    }

    /// Advances if the lookahead token is of the expected kind.
    ///
    /// # Returns
    ///
    /// The token that is now current, or an `UnexpectedToken` error naming
    /// both kinds. On error nothing is consumed.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Result<Token, Error> {
        if self.peek.kind == expected {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(self.peek_error(expected))
        }
    }

    fn peek_error(&self, expected: TokenKind) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: self.peek.kind,
            },
            self.peek.span,
        )
    }

    pub(crate) fn nesting(&self) -> usize {
        self.nesting
    }

    pub(crate) fn restore_nesting(&mut self, nesting: usize) {
        self.nesting = nesting;
    }

    /// Opens one more expression level, failing at the current token once
    /// [`MAX_NESTING_DEPTH`] levels are open.
    pub(crate) fn nest(&mut self) -> Result<(), Error> {
        if self.nesting >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current.span,
            ));
        }

        self.nesting += 1;
        Ok(())
    }

    /// Consumes a `;` if one follows. Terminators are optional everywhere.
    pub fn skip_terminator(&mut self) {
        if self.peek.kind == TokenKind::Semicolon {
            self.advance();
        }
    }

    /// Appends a diagnostic.
    pub fn record(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Skips the rest of a failed statement.
    ///
    /// Braced groups inside the statement are skipped whole. Outside of them
    /// it stops with `current` on a `;`, a `}`, `EOF`, or the last token
    /// before a `}`, so the caller's usual advance lands on the next
    /// statement or on the closing brace of the enclosing block.
    pub fn synchronize(&mut self) {
        let mut depth = 0usize;

        loop {
            match self.current.kind {
                TokenKind::EOF => return,
                TokenKind::OpenCurly => depth += 1,
                TokenKind::CloseCurly if depth > 0 => depth -= 1,
                TokenKind::CloseCurly | TokenKind::Semicolon if depth == 0 => return,
                _ => {}
            }

            if depth == 0 && self.peek.kind == TokenKind::CloseCurly {
                return;
            }
            self.advance();
        }
    }

    /// Returns the diagnostics collected so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the diagnostics as their message strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Consumes the parser, returning its diagnostics.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until `EOF`.
    ///
    /// Always returns a program. When [`Parser::errors`] is non-empty the
    /// program holds only the statements that parsed cleanly.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current.kind != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.record(error);
                    self.synchronize();
                }
            }
            self.advance();
        }

        program
    }
}

/// Lexes and parses `source` with a fresh lexer and parser.
///
/// # Returns
///
/// The program and the ordered diagnostics. The program is only
/// trustworthy when the diagnostics are empty.
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
