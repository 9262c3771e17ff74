//! Block-structured symbol table
//!
//! This module provides the scope stack used during validation:
//! - [`ScopeTable`]: ordered stack of scope frames, global frame at index 0
//! - [`Symbol`]: a declared name with its kind
//!
//! # Scoping rules
//!
//! A name may be defined at most once per frame. Inner frames may redefine a
//! name from an outer frame; lookups search innermost to outermost, so the
//! inner definition hides the outer one until its frame is left.

use crate::parser::ast::TypeName;
use crate::semantic::errors::SemanticError;
use crate::trace::{Event, EventSink};
use rustc_hash::FxHashMap;
use std::fmt;

/// What a symbol names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Variable(TypeName),
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Function => f.write_str("function"),
            SymbolKind::Variable(ty) => write!(f, "{}", ty),
        }
    }
}

/// A declared name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Declaration line; `None` for intrinsics
    pub line: Option<usize>,
}

impl Symbol {
    pub fn function(name: impl Into<String>, line: Option<usize>) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Function,
            line,
        }
    }

    pub fn variable(name: impl Into<String>, ty: TypeName, line: Option<usize>) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Variable(ty),
            line,
        }
    }
}

/// Stack of scope frames.
///
/// Owned by a single validation run and dropped with it.
pub struct ScopeTable<'s> {
    frames: Vec<FxHashMap<String, Symbol>>,
    sink: &'s mut dyn EventSink,
}

impl<'s> ScopeTable<'s> {
    /// Create a table holding only the (empty) global frame
    pub fn new(sink: &'s mut dyn EventSink) -> Self {
        ScopeTable {
            frames: vec![FxHashMap::default()],
            sink,
        }
    }

    /// Index of the innermost frame (0 = global)
    pub fn level(&self) -> usize {
        self.frames.len() - 1
    }

    /// Push a new empty frame
    pub fn enter_scope(&mut self) {
        self.frames.push(FxHashMap::default());
        self.sink.emit(Event::ScopeEntered {
            level: self.level(),
        });
    }

    /// Pop the innermost frame, discarding its symbols.
    ///
    /// The global frame is never popped.
    pub fn leave_scope(&mut self) {
        if self.frames.len() == 1 {
            tracing::warn!("attempted to leave the global scope");
            return;
        }

        let level = self.level();
        if let Some(frame) = self.frames.pop() {
            let mut discarded: Vec<String> = frame.into_keys().collect();
            discarded.sort();
            self.sink.emit(Event::ScopeLeft { level, discarded });
        }
    }

    /// Define a symbol in the innermost frame
    pub fn define(&mut self, symbol: Symbol) -> Result<(), SemanticError> {
        let level = self.level();
        let frame = &mut self.frames[level];

        if frame.contains_key(&symbol.name) {
            return Err(SemanticError::DuplicateSymbol {
                name: symbol.name,
                line: symbol.line,
            });
        }

        frame.insert(symbol.name.clone(), symbol.clone());
        self.sink.emit(Event::SymbolDefined { symbol, level });
        Ok(())
    }

    /// Find the innermost definition of `name`
    pub fn lookup(&mut self, name: &str) -> Option<&Symbol> {
        let index = self
            .frames
            .iter()
            .rposition(|frame| frame.contains_key(name));

        self.sink.emit(Event::Lookup {
            name: name.to_string(),
            found: index.is_some(),
        });

        index.and_then(|index| self.frames[index].get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_lookup() {
        let mut sink = Vec::new();
        let mut scopes = ScopeTable::new(&mut sink);

        scopes
            .define(Symbol::variable("x", TypeName::Int, Some(1)))
            .unwrap();

        let found = scopes.lookup("x").cloned();
        assert_eq!(
            found.map(|symbol| symbol.kind),
            Some(SymbolKind::Variable(TypeName::Int))
        );
        assert!(scopes.lookup("y").is_none());
    }

    #[test]
    fn test_duplicate_in_same_frame() {
        let mut sink = Vec::new();
        let mut scopes = ScopeTable::new(&mut sink);

        scopes.define(Symbol::function("f", Some(1))).unwrap();
        let err = scopes
            .define(Symbol::variable("f", TypeName::Char, Some(2)))
            .unwrap_err();

        assert_eq!(
            err,
            SemanticError::DuplicateSymbol {
                name: "f".to_string(),
                line: Some(2),
            }
        );
    }

    #[test]
    fn test_shadowing_and_leave() {
        let mut sink = Vec::new();
        let mut scopes = ScopeTable::new(&mut sink);

        scopes
            .define(Symbol::variable("x", TypeName::Int, Some(1)))
            .unwrap();
        scopes.enter_scope();
        scopes
            .define(Symbol::variable("x", TypeName::Real, Some(2)))
            .unwrap();
        assert_eq!(
            scopes.lookup("x").map(|symbol| symbol.kind),
            Some(SymbolKind::Variable(TypeName::Real))
        );

        scopes.leave_scope();
        assert_eq!(scopes.level(), 0);
        assert_eq!(
            scopes.lookup("x").map(|symbol| symbol.kind),
            Some(SymbolKind::Variable(TypeName::Int))
        );
    }

    #[test]
    fn test_global_frame_survives_leave() {
        let mut sink = Vec::new();
        let mut scopes = ScopeTable::new(&mut sink);

        scopes.define(Symbol::function("print", None)).unwrap();
        scopes.leave_scope();

        assert_eq!(scopes.level(), 0);
        assert!(scopes.lookup("print").is_some());
    }

    #[test]
    fn test_events_narrate_operations() {
        let mut sink = Vec::new();
        {
            let mut scopes = ScopeTable::new(&mut sink);
            scopes.enter_scope();
            scopes
                .define(Symbol::variable("b", TypeName::Int, Some(3)))
                .unwrap();
            scopes
                .define(Symbol::variable("a", TypeName::Int, Some(4)))
                .unwrap();
            scopes.leave_scope();
        }

        assert_eq!(sink[0], Event::ScopeEntered { level: 1 });
        assert_eq!(
            sink.last(),
            Some(&Event::ScopeLeft {
                level: 1,
                discarded: vec!["a".to_string(), "b".to_string()],
            })
        );
    }
}
