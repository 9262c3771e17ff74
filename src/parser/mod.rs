//! Mini-C source parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), split across `declarations`,
//!   `statements` and `expressions`
//! - [`ast`]: AST node definitions and generic child traversal
//!
//! # Supported language
//!
//! - Types: `int`, `real`, `char`
//! - A single function with no parameters
//! - Statements: declarations, assignments, single-argument calls, `return`
//! - Expressions: `+` chains over identifiers and literals
//! - `//` line comments
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

pub use parse::{parse, Parser, SyntaxError};
