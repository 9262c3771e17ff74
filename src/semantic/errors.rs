//! Semantic error types
//!
//! [`SemanticError`] covers the two name-resolution failures the validator
//! detects. Like every compile error, the first one found ends the run.

use crate::errors::at_line;
use thiserror::Error;

/// Name-resolution failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// A name defined twice in the same scope
    #[error("Semantic Error{}: Symbol '{}' already declared in this scope.", at_line(.line), .name)]
    DuplicateSymbol { name: String, line: Option<usize> },

    /// A name used with no visible definition
    #[error("Semantic Error at line {line}: Undeclared variable or function '{name}'.")]
    UndeclaredName { name: String, line: usize },
}

impl SemanticError {
    pub fn line(&self) -> Option<usize> {
        match self {
            SemanticError::DuplicateSymbol { line, .. } => *line,
            SemanticError::UndeclaredName { line, .. } => Some(*line),
        }
    }

    /// The name the error is about
    pub fn name(&self) -> &str {
        match self {
            SemanticError::DuplicateSymbol { name, .. }
            | SemanticError::UndeclaredName { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let duplicate = SemanticError::DuplicateSymbol {
            name: "x".to_string(),
            line: Some(3),
        };
        assert_eq!(
            duplicate.to_string(),
            "Semantic Error at line 3: Symbol 'x' already declared in this scope."
        );

        let undeclared = SemanticError::UndeclaredName {
            name: "y".to_string(),
            line: 2,
        };
        assert_eq!(undeclared.line(), Some(2));
        assert_eq!(undeclared.name(), "y");
        assert_eq!(
            undeclared.to_string(),
            "Semantic Error at line 2: Undeclared variable or function 'y'."
        );
    }
}
