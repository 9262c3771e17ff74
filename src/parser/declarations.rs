//! Declaration parsing implementation
//!
//! This module handles the declaration forms of the language:
//!
//! - Function declarations: `int main() { ... }`
//! - Variable declarations: `real x = 1.5;`
//! - Type names: `int`, `real`, `char`
//!
//! # Grammar
//!
//! ```text
//! function_decl ::= type IDENT "(" ")" "{" statement* "}"
//! var_decl      ::= type IDENT ("=" expr)? ";"
//! type          ::= "int" | "real" | "char"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse function declaration: type name() { body }
    pub(crate) fn parse_function_declaration(&mut self) -> Result<Node, SyntaxError> {
        let return_type = self.parse_type()?;
        let name = self.expect_identifier()?;

        self.expect_symbol("(")?;
        self.expect_symbol(")")?;
        self.expect_symbol("{")?;

        let body = self.parse_block_statements()?;

        self.expect_symbol("}")?;

        Ok(Node::FunctionDecl {
            return_type,
            line: name.source_line().unwrap_or_default(),
            name: name.text,
            body,
        })
    }

    /// Parse type: one of the primitive type keywords
    pub(crate) fn parse_type(&mut self) -> Result<TypeRef, SyntaxError> {
        let token = self.peek();

        if token.is_eof() {
            return Err(SyntaxError {
                message: "Unexpected end of input. Expected type (int, real, char).".to_string(),
                line: None,
            });
        }

        let name = match token.kind {
            TokenKind::Reserved => TypeName::from_keyword(&token.text),
            _ => None,
        };

        match name {
            Some(name) => {
                let token = self.advance();
                Ok(TypeRef {
                    name,
                    line: token.source_line().unwrap_or_default(),
                })
            }
            None => Err(SyntaxError::at(
                token,
                format!("Expected type (int, real, char), got '{}'", token.text),
            )),
        }
    }

    /// Parse variable declaration: type name [= init];
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<Node, SyntaxError> {
        let var_type = self.parse_type()?;
        let name = self.expect_identifier()?;

        let init = if self.check_text("=") {
            self.expect_symbol("=")?;
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        self.expect_symbol(";")?;

        Ok(Node::VarDecl {
            var_type,
            line: name.source_line().unwrap_or_default(),
            name: name.text,
            init,
        })
    }
}
