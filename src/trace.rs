//! Compiler event narration
//!
//! The scope table and the optimizer report what they do as [`Event`]s sent
//! to an [`EventSink`]. Sinks only observe: nothing they do feeds back into
//! compilation.
//!
//! - [`TracingSink`] forwards events to `tracing`
//! - `Vec<Event>` records them in order (tests, the explorer)
//! - [`NullSink`] drops them

use crate::parser::ast::BinOp;
use crate::semantic::Symbol;
use std::fmt;

/// Something a compiler phase did
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ScopeEntered {
        level: usize,
    },
    ScopeLeft {
        level: usize,
        discarded: Vec<String>,
    },
    SymbolDefined {
        symbol: Symbol,
        level: usize,
    },
    Lookup {
        name: String,
        found: bool,
    },
    Folded {
        left: String,
        op: BinOp,
        right: String,
        result: String,
        line: usize,
    },
}

impl Event {
    /// Source line the event refers to, when it has one
    pub fn line(&self) -> Option<usize> {
        match self {
            Event::SymbolDefined { symbol, .. } => symbol.line,
            Event::Folded { line, .. } => Some(*line),
            Event::ScopeEntered { .. } | Event::ScopeLeft { .. } | Event::Lookup { .. } => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::ScopeEntered { level } => write!(f, "enter scope {}", level),
            Event::ScopeLeft { level, discarded } => {
                if discarded.is_empty() {
                    write!(f, "leave scope {}", level)
                } else {
                    write!(f, "leave scope {} (drop {})", level, discarded.join(", "))
                }
            }
            Event::SymbolDefined { symbol, level } => write!(
                f,
                "define '{}' ({}) in scope {}",
                symbol.name, symbol.kind, level
            ),
            Event::Lookup { name, found } => {
                let outcome = if *found { "found" } else { "not found" };
                write!(f, "lookup '{}': {}", name, outcome)
            }
            Event::Folded {
                left,
                op,
                right,
                result,
                ..
            } => write!(f, "fold {} {} {} => {}", left, op, right, result),
        }
    }
}

/// Receiver for compiler events
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

/// Logs every event through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: Event) {
        match &event {
            Event::Folded { line, .. } => tracing::debug!(line, "{}", event),
            _ => tracing::trace!("{}", event),
        }
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: Event) {}
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let defined = Event::SymbolDefined {
            symbol: Symbol::function("main", Some(1)),
            level: 0,
        };
        assert_eq!(defined.to_string(), "define 'main' (function) in scope 0");
        assert_eq!(defined.line(), Some(1));

        let left = Event::ScopeLeft {
            level: 1,
            discarded: vec!["x".to_string(), "y".to_string()],
        };
        assert_eq!(left.to_string(), "leave scope 1 (drop x, y)");
        assert_eq!(left.line(), None);
    }

    #[test]
    fn test_vec_records_in_order() {
        let mut sink: Vec<Event> = Vec::new();
        sink.emit(Event::ScopeEntered { level: 1 });
        sink.emit(Event::Lookup {
            name: "x".to_string(),
            found: false,
        });

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].to_string(), "lookup 'x': not found");
    }
}
