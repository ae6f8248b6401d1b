use std::fmt::{self, Debug, Display};

use crate::Span;

use super::{
    expressions::{
        BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
        PrefixExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Shared by every statement and expression node. `Display` renders the
/// canonical source text the node stands for.
pub trait Node: Display + Debug {
    /// Returns the literal text of the token the node was built from.
    fn token_literal(&self) -> &str;
    /// Returns the span of the token the node was built from.
    fn get_span(&self) -> Span;
}

/// Statement
///
/// The closed set of statement kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => stmt.token_literal(),
            Stmt::Return(stmt) => stmt.token_literal(),
            Stmt::Expression(stmt) => stmt.token_literal(),
            Stmt::Block(stmt) => stmt.token_literal(),
        }
    }
    fn get_span(&self) -> Span {
        match self {
            Stmt::Let(stmt) => stmt.get_span(),
            Stmt::Return(stmt) => stmt.get_span(),
            Stmt::Expression(stmt) => stmt.get_span(),
            Stmt::Block(stmt) => stmt.get_span(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => Display::fmt(stmt, f),
            Stmt::Return(stmt) => Display::fmt(stmt, f),
            Stmt::Expression(stmt) => Display::fmt(stmt, f),
            Stmt::Block(stmt) => Display::fmt(stmt, f),
        }
    }
}

/// Expression
///
/// The closed set of expression kinds. Composite variants box their
/// children so the enum stays small.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionLiteral),
    Call(CallExpr),
}

impl Expr {
    fn as_node(&self) -> &dyn Node {
        match self {
            Expr::Identifier(expr) => expr,
            Expr::Integer(expr) => expr,
            Expr::Boolean(expr) => expr,
            Expr::Prefix(expr) => expr,
            Expr::Infix(expr) => expr,
            Expr::If(expr) => expr,
            Expr::Function(expr) => expr,
            Expr::Call(expr) => expr,
        }
    }
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        self.as_node().token_literal()
    }
    fn get_span(&self) -> Span {
        self.as_node().get_span()
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_node(), f)
    }
}

/// Program
///
/// The root of every parse. Not itself a statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
