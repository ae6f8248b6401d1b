use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, led_rule, nud_rule, BindingPower, LedRule, NudRule},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// On success the current token is the last token of the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let outer = parser.nesting();
    let result = parse_expr_at(parser, bp);
    parser.restore_nesting(outer);

    result
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.nest()?;

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(rule) = nud_rule(token_kind) else {
        return Err(Error::new(
            ErrorImpl::MissingPrefixRule { found: token_kind },
            parser.current_token().span,
        ));
    };

    let mut left = parse_nud(parser, rule)?;

    // While the next operator binds tighter than bp, keep extending lhs
    while parser.peek_token_kind() != TokenKind::Semicolon && bp < parser.peek_binding_power() {
        let Some(rule) = led_rule(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        // Every operator applied deepens the tree on the left.
        parser.nest()?;
        left = parse_led(parser, rule, left)?;
    }

    Ok(left)
}

fn parse_nud(parser: &mut Parser, rule: NudRule) -> Result<Expr, Error> {
    match rule {
        NudRule::Identifier => Ok(parse_identifier(parser)),
        NudRule::Integer => parse_integer_literal(parser),
        NudRule::Boolean => Ok(parse_boolean_literal(parser)),
        NudRule::Grouping => parse_grouping_expr(parser),
        NudRule::Prefix => parse_prefix_expr(parser),
        NudRule::If => parse_if_expr(parser),
        NudRule::Function => parse_function_literal(parser),
    }
}

fn parse_led(parser: &mut Parser, rule: LedRule, left: Expr) -> Result<Expr, Error> {
    match rule {
        LedRule::Binary => parse_binary_expr(parser, left),
        LedRule::Call => parse_call_expr(parser, left),
    }
}

pub fn parse_identifier(parser: &mut Parser) -> Expr {
    let token = parser.current_token().clone();

    Expr::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    })
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                literal: token.literal,
            },
            token.span,
        )),
    }
}

pub fn parse_boolean_literal(parser: &mut Parser) -> Expr {
    let token = parser.current_token().clone();

    Expr::Boolean(BooleanLiteral {
        value: token.is(TokenKind::True),
        token,
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let operator_token = parser.advance();

    // Same power on the right keeps chains left-associative.
    let right = parse_expr(parser, binding_power(operator_token.kind))?;

    Ok(Expr::Infix(InfixExpr {
        left: Box::new(left),
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // if (<condition>) { <consequence> } else { <alternative> }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        let token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier {
            value: token.literal.clone(),
            token,
        });

        if parser.peek_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        token,
        function: Box::new(left),
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut args = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(args);
    }

    parser.advance();
    args.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(args)
}
