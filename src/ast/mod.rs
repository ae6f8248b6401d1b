/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The Node trait, the Stmt/Expr enums and the Program root
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for the statement node types
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
