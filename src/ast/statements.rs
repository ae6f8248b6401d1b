use std::{
    fmt::{self, Display},
    slice::Iter,
};

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, Node, Stmt},
    expressions::Identifier,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Expr,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.token_literal(), self.value)
    }
}

/// A bare expression in statement position, e.g. a call.
///
/// Renders as the expression alone; the optional `;` is not reproduced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    /// The first token of the expression.
    pub token: Token,
    pub expression: Expr,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// A brace-delimited statement list. The braces are not rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    /// The opening `{`.
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> Span {
        self.token.span
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
