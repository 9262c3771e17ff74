//! Name-resolution walk over the tree
//!
//! The validator defines a symbol for every declaration and resolves every
//! identifier read or assigned. `FunctionDecl`, `VarDecl`, `Assign` and
//! `Identifier` have rules of their own; every other node is checked by
//! recursing into its children.

use crate::config::{CompilerConfig, Intrinsics};
use crate::parser::ast::Node;
use crate::semantic::errors::SemanticError;
use crate::semantic::scope::{ScopeTable, Symbol};
use crate::trace::EventSink;

/// One validation run.
///
/// The scope table lives and dies with the validator; [`Validator::validate`]
/// consumes it so a table is never carried over to another tree.
pub struct Validator<'s> {
    scopes: ScopeTable<'s>,
}

impl<'s> Validator<'s> {
    /// Create a validator whose global scope holds the given intrinsics
    pub fn new(intrinsics: &Intrinsics, sink: &'s mut dyn EventSink) -> Self {
        let mut scopes = ScopeTable::new(sink);
        for intrinsic in intrinsics.iter() {
            // Entries are unique by name, so seeding cannot collide
            let _ = scopes.define(Symbol::function(intrinsic.name.clone(), None));
        }
        Validator { scopes }
    }

    /// Check every declaration and use under `node`
    pub fn validate(mut self, node: &Node) -> Result<(), SemanticError> {
        self.visit(node)
    }

    fn visit(&mut self, node: &Node) -> Result<(), SemanticError> {
        match node {
            Node::FunctionDecl {
                name, body, line, ..
            } => {
                self.scopes.define(Symbol::function(name.clone(), Some(*line)))?;
                self.scopes.enter_scope();
                for statement in body {
                    self.visit(statement)?;
                }
                self.scopes.leave_scope();
                Ok(())
            }
            Node::VarDecl {
                var_type,
                name,
                init,
                line,
            } => {
                // The initializer cannot see the variable it initializes
                if let Some(init) = init {
                    self.visit(init)?;
                }
                self.scopes
                    .define(Symbol::variable(name.clone(), var_type.name, Some(*line)))
            }
            Node::Assign { target, expr, line } => {
                self.resolve(target, *line)?;
                self.visit(expr)
            }
            Node::Identifier { name, line } => self.resolve(name, *line),
            _ => node.try_for_each_child(|child| self.visit(child)),
        }
    }

    fn resolve(&mut self, name: &str, line: usize) -> Result<(), SemanticError> {
        match self.scopes.lookup(name) {
            Some(_) => Ok(()),
            None => Err(SemanticError::UndeclaredName {
                name: name.to_string(),
                line,
            }),
        }
    }
}

/// Validate a whole program against the configured intrinsics
pub fn validate(
    program: &Node,
    config: &CompilerConfig,
    sink: &mut dyn EventSink,
) -> Result<(), SemanticError> {
    tracing::info!("validating program");
    Validator::new(&config.intrinsics, sink).validate(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::trace::{Event, NullSink};

    fn check(source: &str) -> Result<(), SemanticError> {
        let program = Parser::from_source(source).parse_program().unwrap();
        validate(&program, &CompilerConfig::default(), &mut NullSink)
    }

    #[test]
    fn test_valid_program() {
        assert_eq!(
            check("int main() { int x = 1; x = x + 2; printf(x); return x; }"),
            Ok(())
        );
    }

    #[test]
    fn test_duplicate_local() {
        let err = check("int main() {\n int x;\n real x;\n}").unwrap_err();

        assert_eq!(
            err,
            SemanticError::DuplicateSymbol {
                name: "x".to_string(),
                line: Some(3),
            }
        );
    }

    #[test]
    fn test_undeclared_identifier() {
        let err = check("int main() {\n return y;\n}").unwrap_err();

        assert_eq!(
            err,
            SemanticError::UndeclaredName {
                name: "y".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn test_initializer_cannot_see_its_variable() {
        let err = check("int main() { int x = x; }").unwrap_err();
        assert_eq!(err.name(), "x");
        assert!(matches!(err, SemanticError::UndeclaredName { .. }));
    }

    #[test]
    fn test_local_may_shadow_function_name() {
        assert_eq!(check("int main() { int main = 0; return main; }"), Ok(()));
    }

    #[test]
    fn test_function_may_not_redeclare_intrinsic() {
        let err = check("int printf() { }").unwrap_err();
        assert_eq!(
            err,
            SemanticError::DuplicateSymbol {
                name: "printf".to_string(),
                line: Some(1),
            }
        );
    }

    #[test]
    fn test_assignment_target_is_resolved() {
        let err = check("int main() {\n y = 1;\n}").unwrap_err();
        assert_eq!(
            err,
            SemanticError::UndeclaredName {
                name: "y".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn test_assignment_target_checked_before_value() {
        let err = check("int main() { a = b; }").unwrap_err();
        assert_eq!(err.name(), "a");
    }

    #[test]
    fn test_callee_is_not_resolved() {
        assert_eq!(check("int main() { launch(1); }"), Ok(()));
    }

    #[test]
    fn test_call_argument_is_resolved() {
        let err = check("int main() { printf(z); }").unwrap_err();
        assert_eq!(err.name(), "z");
    }

    #[test]
    fn test_events_recorded() {
        let program = Parser::from_source("int main() { int a = 1; }")
            .parse_program()
            .unwrap();
        let mut events = Vec::new();
        validate(&program, &CompilerConfig::default(), &mut events).unwrap();

        let rendered: Vec<String> = events.iter().map(Event::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "define 'printf' (function) in scope 0",
                "define 'main' (function) in scope 0",
                "enter scope 1",
                "define 'a' (int) in scope 1",
                "leave scope 1 (drop a)",
            ]
        );
    }
}
