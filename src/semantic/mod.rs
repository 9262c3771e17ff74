//! Semantic validation
//!
//! This module checks name resolution over a parsed program:
//! - [`scope`]: block-structured symbol table
//! - [`validator`]: tree walk that defines and resolves names
//! - [`errors`]: semantic error types
//!
//! # Rules
//!
//! Every identifier used in an expression, and every assignment target, must
//! be declared in an enclosing scope, and no scope may declare the same name twice. A function body opens
//! a new scope, so its locals may shadow globals. Intrinsics from the
//! configuration are pre-declared in the global scope.
//!
//! Call targets are not resolved: a call to an unknown function passes
//! validation.

pub mod errors;
pub mod scope;
pub mod validator;

pub use errors::SemanticError;
pub use scope::{ScopeTable, Symbol, SymbolKind};
pub use validator::{validate, Validator};
