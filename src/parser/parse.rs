//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, token helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser with one token of lookahead:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: function declarations, types and variable declarations
//! - `statements`: statement dispatch and the remaining statement kinds
//! - `expressions`: addition chains and terms
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! The token stream always ends with an end-of-input sentinel (synthesized
//! when missing), so lookahead past the real stream never faults. Parsing is
//! fail-fast: the first violation is returned and nothing is recovered.

use crate::errors::at_line;
use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use thiserror::Error;

/// Syntax error: message plus the offending line, when one is known.
///
/// End-of-input errors carry no line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Syntax Error{}: {}", at_line(.line), .message)]
pub struct SyntaxError {
    pub message: String,
    pub line: Option<usize>,
}

impl SyntaxError {
    pub(crate) fn at(token: &Token, message: impl Into<String>) -> Self {
        SyntaxError {
            message: message.into(),
            line: token.source_line(),
        }
    }
}

/// Recursive descent parser for the mini-C grammar
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Create a parser over an existing token stream
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            tokens.push(Token::eof());
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Tokenize `source` and create a parser over the result
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source).tokenize())
    }

    /// Parse the entire program: one function declaration, then end of input
    pub fn parse_program(&mut self) -> Result<Node, SyntaxError> {
        let function = self.parse_function_declaration()?;

        if !self.is_at_end() {
            let token = self.peek();
            return Err(SyntaxError::at(
                token,
                format!(
                    "Unexpected token '{}' after program completion.",
                    token.text
                ),
            ));
        }

        Ok(Node::Program {
            function: Box::new(function),
        })
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub(crate) fn peek(&self) -> &Token {
        // The sentinel is never consumed, so `position` always stays in bounds
        &self.tokens[self.position]
    }

    /// Look `n` tokens ahead; anything past the stream is the sentinel
    pub(crate) fn peek_ahead(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.position + n).min(last)]
    }

    /// Whether the current token has exactly this text
    pub(crate) fn check_text(&self, text: &str) -> bool {
        let token = self.peek();
        !token.is_eof() && token.text == text
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    /// Consume a token of the expected kind (and text, when given)
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        text: Option<&str>,
    ) -> Result<Token, SyntaxError> {
        let token = self.peek();

        if token.is_eof() {
            let expected = match text {
                Some(text) => format!("'{}' ({})", text, kind.describe()),
                None => kind.describe().to_string(),
            };
            return Err(SyntaxError {
                message: format!("Unexpected end of input. Expected {}.", expected),
                line: None,
            });
        }

        if token.kind != kind || text.is_some_and(|text| token.text != text) {
            return Err(SyntaxError::at(
                token,
                format!(
                    "Expected '{}', got '{}'",
                    text.unwrap_or(kind.describe()),
                    token.text
                ),
            ));
        }

        Ok(self.advance())
    }

    pub(crate) fn expect_symbol(&mut self, symbol: &str) -> Result<Token, SyntaxError> {
        self.expect(TokenKind::Symbol, Some(symbol))
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<Token, SyntaxError> {
        self.expect(TokenKind::Identifier, None)
    }

    /// Build the error for a token nothing in the grammar accepts here
    pub(crate) fn unexpected(&self, context: &str) -> SyntaxError {
        let token = self.peek();
        if token.is_eof() {
            SyntaxError {
                message: format!("Unexpected end of input {}.", context),
                line: None,
            }
        } else {
            SyntaxError::at(
                token,
                format!("Unexpected token '{}' {}.", token.text, context),
            )
        }
    }
}

/// Parse a token stream into a `Program` tree
pub fn parse(tokens: Vec<Token>) -> Result<Node, SyntaxError> {
    Parser::new(tokens).parse_program()
}
