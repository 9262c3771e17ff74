//! # Introduction
//!
//! minic compiles a tiny C-like language to Python. Between parsing and
//! emission it checks name resolution and folds constant arithmetic, and every
//! phase can be inspected from the command line or in a terminal explorer
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Parser → Tree → Validator → Optimizer → Python emitter
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds a [`parser::ast::Node`] tree.
//! 2. [`semantic`]: resolves names against a block-structured
//!    [`semantic::ScopeTable`]; the tree is only read.
//! 3. [`optimizer`]: rewrites the tree, folding `BinaryOp`s over numeric
//!    literals into a single literal.
//! 4. [`codegen`]: renders the final tree as a Python module.
//! 5. [`pipeline`]: runs the phases in order and keeps every intermediate result.
//! 6. [`ui`]: ratatui-based phase explorer; not part of the stable library API.
//!
//! Phases report what they do as [`trace::Event`]s; [`tree`] prints trees as
//! indented outlines.
//!
//! ## Supported language
//!
//! Types: `int`, `real`, `char`. One function per program, with no parameters.
//! Statements: declarations with optional initializer, assignment, `return`,
//! and calls with at most one argument. Expressions: identifiers, literals and
//! left-associative `+`. Comments: `//` to end of line.

pub mod codegen;
pub mod config;
pub mod errors;
pub mod optimizer;
pub mod parser;
pub mod pipeline;
pub mod semantic;
pub mod trace;
pub mod tree;
pub mod ui;

pub use config::CompilerConfig;
pub use errors::CompileError;
pub use pipeline::{compile, Compilation};
