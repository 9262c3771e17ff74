//! Constant folding
//!
//! The optimizer rewrites a tree by ownership transfer: each node goes in and
//! its replacement comes out. `BinaryOp` nodes whose operands are both numeric
//! literals (after their own rewriting) are replaced by a single literal;
//! every other node is rebuilt from its rewritten children.
//!
//! # Arithmetic
//!
//! Folding is done in `f64` regardless of how the literals are spelled. A
//! result with no fractional part is rendered without a decimal point, so
//! `4 / 2` folds to `2` and `5 / 2` to `2.5`. Division by zero and results
//! that are not finite stop the compilation.

use crate::parser::ast::{BinOp, Node};
use crate::trace::{Event, EventSink};
use thiserror::Error;

/// Arithmetic failures while folding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    #[error("Arithmetic Error at line {line}: division by zero in '{left} / {right}'")]
    DivisionByZero {
        left: String,
        right: String,
        line: usize,
    },

    #[error("Arithmetic Error at line {line}: '{left} {op} {right}' does not produce a finite number")]
    NonFinite {
        left: String,
        op: BinOp,
        right: String,
        line: usize,
    },

    #[error("Arithmetic Error at line {line}: '{text}' is not a number")]
    InvalidLiteral { text: String, line: usize },
}

impl FoldError {
    pub fn line(&self) -> usize {
        match self {
            FoldError::DivisionByZero { line, .. }
            | FoldError::NonFinite { line, .. }
            | FoldError::InvalidLiteral { line, .. } => *line,
        }
    }
}

/// Tree rewriter that folds constant arithmetic
pub struct Optimizer<'s> {
    sink: &'s mut dyn EventSink,
}

impl<'s> Optimizer<'s> {
    pub fn new(sink: &'s mut dyn EventSink) -> Self {
        Optimizer { sink }
    }

    /// Rewrite `node` and everything beneath it
    pub fn rewrite(&mut self, node: Node) -> Result<Node, FoldError> {
        match node {
            Node::BinaryOp {
                op,
                left,
                right,
                line,
            } => {
                let left = self.rewrite(*left)?;
                let right = self.rewrite(*right)?;

                if let (Node::NumberLit { text: lhs, .. }, Node::NumberLit { text: rhs, .. }) =
                    (&left, &right)
                {
                    let text = self.fold(op, lhs, rhs, line)?;
                    return Ok(Node::NumberLit { text, line });
                }

                Ok(Node::BinaryOp {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                    line,
                })
            }
            _ => node.try_map_children(|child| self.rewrite(child)),
        }
    }

    fn fold(
        &mut self,
        op: BinOp,
        left: &str,
        right: &str,
        line: usize,
    ) -> Result<String, FoldError> {
        let lhs = parse_literal(left, line)?;
        let rhs = parse_literal(right, line)?;

        let value = match op {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => {
                if rhs == 0.0 {
                    return Err(FoldError::DivisionByZero {
                        left: left.to_string(),
                        right: right.to_string(),
                        line,
                    });
                }
                lhs / rhs
            }
        };

        if !value.is_finite() {
            return Err(FoldError::NonFinite {
                left: left.to_string(),
                op,
                right: right.to_string(),
                line,
            });
        }

        let result = render_number(value);
        self.sink.emit(Event::Folded {
            left: left.to_string(),
            op,
            right: right.to_string(),
            result: result.clone(),
            line,
        });
        Ok(result)
    }
}

fn parse_literal(text: &str, line: usize) -> Result<f64, FoldError> {
    text.parse::<f64>().map_err(|_| FoldError::InvalidLiteral {
        text: text.to_string(),
        line,
    })
}

/// Render a folded value: whole numbers without a decimal point
pub fn render_number(value: f64) -> String {
    if value.fract() == 0.0 {
        // `+ 0.0` turns -0 into 0
        format!("{:.0}", value + 0.0)
    } else {
        format!("{}", value)
    }
}

/// Fold every constant expression in `program`
pub fn rewrite(program: Node, sink: &mut dyn EventSink) -> Result<Node, FoldError> {
    tracing::info!("optimizing program");
    Optimizer::new(sink).rewrite(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::NullSink;

    fn num(text: &str) -> Node {
        Node::NumberLit {
            text: text.to_string(),
            line: 1,
        }
    }

    fn ident(name: &str) -> Node {
        Node::Identifier {
            name: name.to_string(),
            line: 1,
        }
    }

    fn binary(op: BinOp, left: Node, right: Node) -> Node {
        Node::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            line: 1,
        }
    }

    fn fold(node: Node) -> Result<Node, FoldError> {
        rewrite(node, &mut NullSink)
    }

    #[test]
    fn test_fold_literals() {
        assert_eq!(fold(binary(BinOp::Add, num("2"), num("3"))), Ok(num("5")));
        assert_eq!(fold(binary(BinOp::Div, num("5"), num("2"))), Ok(num("2.5")));
        assert_eq!(fold(binary(BinOp::Div, num("4"), num("2"))), Ok(num("2")));
        assert_eq!(fold(binary(BinOp::Mul, num("1.5"), num("2"))), Ok(num("3")));
        assert_eq!(fold(binary(BinOp::Sub, num("2"), num("2.5"))), Ok(num("-0.5")));
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(render_number(-0.0), "0");
        assert_eq!(fold(binary(BinOp::Mul, num("0"), num("-1"))), Ok(num("0")));
    }

    #[test]
    fn test_nested_folds_bottom_up() {
        let tree = binary(
            BinOp::Add,
            binary(BinOp::Add, num("1"), num("2")),
            num("3"),
        );
        assert_eq!(fold(tree), Ok(num("6")));
    }

    #[test]
    fn test_identifier_blocks_fold() {
        let tree = binary(
            BinOp::Add,
            ident("x"),
            binary(BinOp::Add, num("1"), num("2")),
        );
        assert_eq!(
            fold(tree),
            Ok(binary(BinOp::Add, ident("x"), num("3")))
        );
    }

    #[test]
    fn test_left_assoc_chain_stops_at_identifier() {
        // x + 1 + 2 parses as (x + 1) + 2, so nothing folds
        let tree = binary(
            BinOp::Add,
            binary(BinOp::Add, ident("x"), num("1")),
            num("2"),
        );
        assert_eq!(fold(tree.clone()), Ok(tree));
    }

    #[test]
    fn test_idempotent() {
        let tree = binary(
            BinOp::Add,
            ident("y"),
            binary(BinOp::Div, num("9"), num("3")),
        );
        let once = fold(tree).unwrap();
        assert_eq!(fold(once.clone()), Ok(once));
    }

    #[test]
    fn test_division_by_zero_is_fatal() {
        let err = fold(binary(BinOp::Div, num("1"), num("0.0"))).unwrap_err();
        assert_eq!(
            err,
            FoldError::DivisionByZero {
                left: "1".to_string(),
                right: "0.0".to_string(),
                line: 1,
            }
        );
        assert_eq!(
            err.to_string(),
            "Arithmetic Error at line 1: division by zero in '1 / 0.0'"
        );
    }

    #[test]
    fn test_overflow_is_fatal() {
        let huge = "9".repeat(300);
        let err = fold(binary(BinOp::Mul, num(&huge), num(&huge))).unwrap_err();
        assert!(matches!(err, FoldError::NonFinite { op: BinOp::Mul, .. }));
    }

    #[test]
    fn test_invalid_literal() {
        let err = fold(binary(BinOp::Add, num("1.2.3"), num("1"))).unwrap_err();
        assert_eq!(
            err,
            FoldError::InvalidLiteral {
                text: "1.2.3".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_folded_literal_keeps_operator_line() {
        let tree = Node::BinaryOp {
            op: BinOp::Add,
            left: Box::new(num("1")),
            right: Box::new(num("1")),
            line: 7,
        };
        assert_eq!(fold(tree).map(|node| node.line()), Ok(7));
    }

    #[test]
    fn test_fold_emits_event() {
        let mut events = Vec::new();
        rewrite(binary(BinOp::Add, num("2"), num("3")), &mut events).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].to_string(), "fold 2 + 3 => 5");
    }
}
