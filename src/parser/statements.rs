//! Statement parsing implementation
//!
//! This module handles parsing of the four statement kinds:
//!
//! - Return statements: `return x;`
//! - Variable declarations: `int x = 42;` (see `declarations`)
//! - Assignments: `x = y + 1;`
//! - Call statements: `printf("hi");`
//!
//! # Grammar
//!
//! ```text
//! statement   ::= return_stmt | var_decl | assign | call_stmt
//! return_stmt ::= "return" expr ";"
//! assign      ::= IDENT "=" expr ";"
//! call_stmt   ::= IDENT "(" expr? ")" ";"
//! ```
//!
//! Dispatch looks only at the current token (and the text of the one after an
//! identifier). There is no backtracking: a lead token that matches none of
//! the forms is an error straight away.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse block statements (inside braces, excluding the braces themselves)
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<Node>, SyntaxError> {
        let mut statements = Vec::new();

        while !self.check_text("}") && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Node, SyntaxError> {
        let token = self.peek();

        if token.kind == TokenKind::Reserved {
            if token.text == "return" {
                return self.parse_return_statement();
            }
            if TypeName::from_keyword(&token.text).is_some() {
                return self.parse_variable_declaration();
            }
        }

        if token.kind == TokenKind::Identifier {
            let next = self.peek_ahead(1);
            if next.text == "=" {
                return self.parse_assignment();
            }
            if next.text == "(" {
                return self.parse_call_statement();
            }
        }

        Err(self.unexpected("to start a statement"))
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Result<Node, SyntaxError> {
        let keyword = self.expect(TokenKind::Reserved, Some("return"))?;
        let expr = self.parse_expression()?;
        self.expect_symbol(";")?;

        Ok(Node::Return {
            expr: Box::new(expr),
            line: keyword.source_line().unwrap_or_default(),
        })
    }

    /// Parse assignment: name = expr;
    fn parse_assignment(&mut self) -> Result<Node, SyntaxError> {
        let target = self.expect_identifier()?;
        self.expect_symbol("=")?;
        let expr = self.parse_expression()?;
        self.expect_symbol(";")?;

        Ok(Node::Assign {
            line: target.source_line().unwrap_or_default(),
            target: target.text,
            expr: Box::new(expr),
        })
    }

    /// Parse call statement: name(expr?);
    fn parse_call_statement(&mut self) -> Result<Node, SyntaxError> {
        let callee = self.expect_identifier()?;
        self.expect_symbol("(")?;

        let args = if self.check_text(")") {
            Vec::new()
        } else {
            self.parse_argument_list()?
        };

        self.expect_symbol(")")?;
        self.expect_symbol(";")?;

        Ok(Node::CallStmt {
            line: callee.source_line().unwrap_or_default(),
            callee: callee.text,
            args,
        })
    }

    /// Argument lists hold a single expression; there is no comma form
    fn parse_argument_list(&mut self) -> Result<Vec<Node>, SyntaxError> {
        Ok(vec![self.parse_expression()?])
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{Parser, SyntaxError};

    fn parse_body(body: &str) -> Result<Vec<Node>, SyntaxError> {
        let source = format!("int main() {{ {} }}", body);
        let program = Parser::from_source(&source).parse_program()?;
        match program {
            Node::Program { function } => match *function {
                Node::FunctionDecl { body, .. } => Ok(body),
                other => panic!("Expected function declaration, got {:?}", other),
            },
            other => panic!("Expected program, got {:?}", other),
        }
    }

    #[test]
    fn test_statement_kinds() {
        let body = parse_body("int x; x = 1; print(x); return x;").unwrap();

        let kinds: Vec<&str> = body.iter().map(Node::kind_name).collect();
        assert_eq!(kinds, vec!["VarDecl", "Assign", "CallStmt", "Return"]);
    }

    #[test]
    fn test_call_without_arguments() {
        let body = parse_body("tick();").unwrap();

        match &body[0] {
            Node::CallStmt { callee, args, .. } => {
                assert_eq!(callee, "tick");
                assert!(args.is_empty());
            }
            other => panic!("Expected CallStmt, got {:?}", other),
        }
    }

    #[test]
    fn test_call_with_one_argument() {
        let body = parse_body(r#"printf("hi");"#).unwrap();

        match &body[0] {
            Node::CallStmt { args, .. } => {
                assert_eq!(
                    args,
                    &vec![Node::StringLit {
                        value: "hi".to_string(),
                        line: 1,
                    }]
                );
            }
            other => panic!("Expected CallStmt, got {:?}", other),
        }
    }

    #[test]
    fn test_two_arguments_rejected() {
        // The lexer has no ',' symbol, so the comma arrives as an error token
        let err = parse_body("foo(a, b);").unwrap_err();

        assert_eq!(err.message, "Expected ')', got ','");
        assert_eq!(err.line, Some(1));
    }

    #[test]
    fn test_unknown_statement_start() {
        let err = parse_body("x;").unwrap_err();

        assert_eq!(err.message, "Unexpected token 'x' to start a statement.");

        let err = parse_body("42;").unwrap_err();
        assert_eq!(err.message, "Unexpected token '42' to start a statement.");
    }

    #[test]
    fn test_identifier_at_end_of_input() {
        let err = Parser::from_source("int main() { x")
            .parse_program()
            .unwrap_err();

        assert_eq!(err.message, "Unexpected token 'x' to start a statement.");
        assert_eq!(err.line, Some(1));
    }

    #[test]
    fn test_return_requires_expression() {
        let err = parse_body("return;").unwrap_err();

        assert_eq!(err.message, "Expected identifier or literal, got ';'");
    }
}
