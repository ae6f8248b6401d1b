//! Unit tests for AST rendering.
//!
//! Nodes are built by hand here so rendering is checked independently of
//! the parser.

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    ast::{Expr, Node, Program, Stmt},
    expressions::{
        BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
        PrefixExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

fn token(kind: TokenKind, literal: &str) -> Token {
    Token {
        kind,
        literal: literal.to_string(),
        span: Span::default(),
    }
}

fn ident(name: &str) -> Identifier {
    Identifier {
        token: token(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerLiteral {
        token: token(TokenKind::Number, &value.to_string()),
        value,
    })
}

fn infix(left: Expr, operator: &str, kind: TokenKind, right: Expr) -> Expr {
    Expr::Infix(InfixExpr {
        token: token(kind, operator),
        left: Box::new(left),
        operator: operator.to_string(),
        right: Box::new(right),
    })
}

fn block(statements: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        token: token(TokenKind::OpenCurly, "{"),
        statements,
    }
}

fn expr_stmt(expression: Expr) -> Stmt {
    Stmt::Expression(ExpressionStmt {
        token: token(TokenKind::Identifier, expression.token_literal()),
        expression,
    })
}

#[test]
fn test_let_statement_string() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: token(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_return_statement_string() {
    let stmt = Stmt::Return(ReturnStmt {
        token: token(TokenKind::Return, "return"),
        value: infix(int(1), "+", TokenKind::Plus, int(2)),
    });

    assert_eq!(stmt.to_string(), "return (1 + 2);");
    assert_eq!(stmt.token_literal(), "return");
}

#[test]
fn test_prefix_and_boolean_string() {
    let expr = Expr::Prefix(PrefixExpr {
        token: token(TokenKind::Not, "!"),
        operator: "!".to_string(),
        right: Box::new(Expr::Boolean(BooleanLiteral {
            token: token(TokenKind::True, "true"),
            value: true,
        })),
    });

    assert_eq!(expr.to_string(), "(!true)");
    assert_eq!(expr.token_literal(), "!");
}

#[test]
fn test_if_expression_string() {
    let mut if_expr = IfExpr {
        token: token(TokenKind::If, "if"),
        condition: Box::new(infix(
            Expr::Identifier(ident("x")),
            "<",
            TokenKind::Less,
            Expr::Identifier(ident("y")),
        )),
        consequence: block(vec![expr_stmt(Expr::Identifier(ident("x")))]),
        alternative: None,
    };

    assert_eq!(Expr::If(if_expr.clone()).to_string(), "if (x < y) x");

    if_expr.alternative = Some(block(vec![expr_stmt(Expr::Identifier(ident("y")))]));
    assert_eq!(Expr::If(if_expr).to_string(), "if (x < y) x else y");
}

#[test]
fn test_function_and_call_string() {
    let function = Expr::Function(FunctionLiteral {
        token: token(TokenKind::Fn, "fn"),
        parameters: vec![ident("x"), ident("y")],
        body: block(vec![expr_stmt(infix(
            Expr::Identifier(ident("x")),
            "+",
            TokenKind::Plus,
            Expr::Identifier(ident("y")),
        ))]),
    });
    assert_eq!(function.to_string(), "fn(x, y) (x + y)");

    let call = Expr::Call(CallExpr {
        token: token(TokenKind::OpenParen, "("),
        function: Box::new(Expr::Identifier(ident("add"))),
        arguments: vec![int(1), infix(int(2), "*", TokenKind::Star, int(3))],
    });
    assert_eq!(call.to_string(), "add(1, (2 * 3))");
    assert_eq!(call.token_literal(), "(");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_block_concatenates_statements() {
    let stmt = Stmt::Block(block(vec![
        expr_stmt(Expr::Identifier(ident("a"))),
        Stmt::Return(ReturnStmt {
            token: token(TokenKind::Return, "return"),
            value: int(5),
        }),
    ]));

    assert_eq!(stmt.to_string(), "areturn 5;");
    assert_eq!(stmt.token_literal(), "{");
}
