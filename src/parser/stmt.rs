use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement starting at the current token.
///
/// On success the current token is the last token of the statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.skip_terminator();

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.skip_terminator();

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;
    parser.skip_terminator();

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses the statements of a block. The current token must be its `{`.
///
/// Statements that fail are recorded and skipped; the block itself only
/// fails when the input ends before its `}`. On success the current token
/// is the closing `}`.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.advance();

    let mut statements = Vec::new();
    loop {
        match parser.current_token_kind() {
            TokenKind::CloseCurly => break,
            TokenKind::EOF => {
                return Err(Error::new(
                    ErrorImpl::UnterminatedBlock,
                    parser.current_token().span,
                ))
            }
            _ => {}
        }

        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.record(error);
                parser.synchronize();

                // Failed on the closing brace itself, keep it.
                if parser.current_token_kind() == TokenKind::CloseCurly {
                    continue;
                }
            }
        }
        parser.advance();
    }

    Ok(BlockStmt { token, statements })
}
