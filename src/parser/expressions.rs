//! Expression parsing implementation
//!
//! Expressions are left-associative addition chains over simple terms.
//!
//! # Grammar
//!
//! ```text
//! expr ::= term ("+" term)*
//! term ::= IDENT | INTEGER | REAL | STRING | CHAR
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse expression: `a + b + c` builds `((a + b) + c)`
    pub(crate) fn parse_expression(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_term()?;

        while self.check_text("+") {
            let op_token = self.expect_symbol("+")?;
            let right = self.parse_term()?;
            node = Node::BinaryOp {
                op: BinOp::Add,
                left: Box::new(node),
                right: Box::new(right),
                line: op_token.source_line().unwrap_or_default(),
            };
        }

        Ok(node)
    }

    /// Parse a single identifier or literal
    fn parse_term(&mut self) -> Result<Node, SyntaxError> {
        let token = self.peek();

        if token.is_eof() {
            return Err(SyntaxError {
                message: "Unexpected end of input. Expected identifier or literal.".to_string(),
                line: None,
            });
        }

        let line = token.source_line().unwrap_or_default();
        let node = match token.kind {
            TokenKind::Identifier => Node::Identifier {
                name: token.text.clone(),
                line,
            },
            TokenKind::Integer | TokenKind::Real => Node::NumberLit {
                text: token.text.clone(),
                line,
            },
            TokenKind::Str => Node::StringLit {
                value: token.text.clone(),
                line,
            },
            TokenKind::Char => match token.text.chars().next() {
                Some(value) => Node::CharLit { value, line },
                None => {
                    return Err(SyntaxError::at(token, "Empty character literal"));
                }
            },
            _ => {
                return Err(SyntaxError::at(
                    token,
                    format!("Expected identifier or literal, got '{}'", token.text),
                ));
            }
        };

        self.advance();
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::Parser;

    fn parse_return_expr(expr: &str) -> Node {
        let source = format!("int main() {{ return {}; }}", expr);
        let program = Parser::from_source(&source).parse_program().unwrap();
        match program {
            Node::Program { function } => match *function {
                Node::FunctionDecl { mut body, .. } => match body.remove(0) {
                    Node::Return { expr, .. } => *expr,
                    other => panic!("Expected Return, got {:?}", other),
                },
                other => panic!("Expected function declaration, got {:?}", other),
            },
            other => panic!("Expected program, got {:?}", other),
        }
    }

    #[test]
    fn test_addition_is_left_associative() {
        let expr = parse_return_expr("a + 1 + 2.5");

        match expr {
            Node::BinaryOp {
                op: BinOp::Add,
                left,
                right,
                ..
            } => {
                assert!(matches!(*left, Node::BinaryOp { op: BinOp::Add, .. }));
                assert_eq!(
                    *right,
                    Node::NumberLit {
                        text: "2.5".to_string(),
                        line: 1,
                    }
                );
            }
            other => panic!("Expected BinaryOp, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_terms() {
        assert_eq!(
            parse_return_expr("'q'"),
            Node::CharLit {
                value: 'q',
                line: 1,
            }
        );
        assert_eq!(
            parse_return_expr("\"text\""),
            Node::StringLit {
                value: "text".to_string(),
                line: 1,
            }
        );
        assert_eq!(
            parse_return_expr("y"),
            Node::Identifier {
                name: "y".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_dangling_plus() {
        let err = Parser::from_source("int main() { return 1 + ; }")
            .parse_program()
            .unwrap_err();

        assert_eq!(err.message, "Expected identifier or literal, got ';'");
    }

    #[test]
    fn test_other_operators_rejected() {
        let err = Parser::from_source("int main() { return 4 - 1; }")
            .parse_program()
            .unwrap_err();

        assert_eq!(err.message, "Expected ';', got '-'");
    }
}
