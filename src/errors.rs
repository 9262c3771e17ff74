//! Compilation error types
//!
//! Each phase has its own error type, defined next to the phase:
//! [`SyntaxError`] (parser), [`SemanticError`] (validator) and [`FoldError`]
//! (optimizer). [`CompileError`] wraps whichever one ended a pipeline run.
//!
//! All errors are terminal: a run stops at the first one and reports it.

use crate::optimizer::FoldError;
use crate::parser::SyntaxError;
use crate::semantic::SemanticError;
use thiserror::Error;

/// The single diagnostic that ended a compilation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Fold(#[from] FoldError),
}

impl CompileError {
    /// Source line of the failure, when known
    pub fn line(&self) -> Option<usize> {
        match self {
            CompileError::Syntax(err) => err.line,
            CompileError::Semantic(err) => err.line(),
            CompileError::Fold(err) => Some(err.line()),
        }
    }

    /// Phase that produced the error
    pub fn phase(&self) -> &'static str {
        match self {
            CompileError::Syntax(_) => "parse",
            CompileError::Semantic(_) => "validate",
            CompileError::Fold(_) => "optimize",
        }
    }
}

/// Formats ` at line N` for errors that may lack a line
pub(crate) fn at_line(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" at line {}", line),
        None => String::new(),
    }
}
