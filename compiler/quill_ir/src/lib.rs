//! Quill IR - token and syntax tree types.
//!
//! This crate contains the data shared by every stage of the pipeline:
//! - `TokenType` and `Token` for scanner output
//! - `LiteralKind` for the runtime kinds a constant can have
//! - AST nodes (`Stmt`, `Expr` and their payload structs)
//!
//! Everything here is immutable once constructed. The scanner and parser
//! create values; the interpreter only reads them.

pub mod ast;
mod token;

pub use ast::{
    Assignment, Binary, Block, Conditional, ElseBranch, Expr, FunctionCall, FunctionDeclaration,
    Identifier, Literal, Parameter, ReturnStatement, Stmt, TypeSpecifier, VariableDeclaration,
    WhileStatement,
};
pub use token::{LiteralKind, Token, TokenType};
