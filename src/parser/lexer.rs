//! Lexer (tokenizer) for mini-C source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! The lexer never fails: malformed literals and stray characters become
//! [`TokenKind::Error`] tokens, which the parser rejects as unexpected tokens
//! when it reaches them.

use std::fmt;

/// Line number carried by the synthesized end-of-input token
pub const EOF_LINE: isize = -1;

/// Words that can never be identifiers
pub const RESERVED_WORDS: [&str; 4] = ["int", "real", "char", "return"];

/// Symbols recognised by the lexer
pub const SYMBOLS: &str = "();{}=+";

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Reserved,
    Identifier,
    Integer,
    Real,
    Str,
    Char,
    Symbol,
    Error,
    Eof,
}

impl TokenKind {
    /// Human readable name used in syntax errors
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Reserved => "reserved word",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Real => "real",
            TokenKind::Str => "string",
            TokenKind::Char => "char",
            TokenKind::Symbol => "symbol",
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Reserved => "Reserved",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::Real => "Real",
            TokenKind::Str => "String",
            TokenKind::Char => "Char",
            TokenKind::Symbol => "Symbol",
            TokenKind::Error => "Error",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A classified lexical unit.
///
/// Tokens are immutable once produced; the parser only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: isize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            line: line as isize,
        }
    }

    /// The end-of-input sentinel
    pub fn eof() -> Self {
        Token {
            kind: TokenKind::Eof,
            text: "EOF".to_string(),
            line: EOF_LINE,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Source line, or `None` for tokens without one (the sentinel)
    pub fn source_line(&self) -> Option<usize> {
        usize::try_from(self.line).ok()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> \"{}\" (line {})", self.kind, self.text, self.line)
    }
}

/// Lexer for mini-C source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input; the result always ends with [`TokenKind::Eof`]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            match self.peek() {
                None => {
                    tokens.push(Token::eof());
                    break;
                }
                Some(_) => tokens.push(self.next_token()),
            }
        }

        tokens
    }

    /// Get next token; the caller guarantees input remains
    fn next_token(&mut self) -> Token {
        let line = self.line;
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Token::eof(),
        };

        match ch {
            '"' => self.string_literal(line),
            '\'' => self.char_literal(line),
            c if c.is_ascii_digit() => self.number_literal(c, line),
            c if c.is_alphabetic() || c == '_' => self.identifier_or_keyword(c, line),
            c if SYMBOLS.contains(c) => Token::new(TokenKind::Symbol, c.to_string(), line),
            c => Token::new(TokenKind::Error, c.to_string(), line),
        }
    }

    /// Parse string literal; contents are kept raw, without escapes
    fn string_literal(&mut self, line: usize) -> Token {
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if ch == '"' {
                self.advance();
                return Token::new(TokenKind::Str, value, line);
            }
            if ch == '\n' {
                break;
            }
            value.push(ch);
            self.advance();
        }

        Token::new(
            TokenKind::Error,
            format!("Unterminated string: {}", value),
            line,
        )
    }

    /// Parse character literal: exactly one character between single quotes
    fn char_literal(&mut self, line: usize) -> Token {
        if let (Some(value), Some('\'')) = (self.peek(), self.peek_ahead(1)) {
            if value != '\n' {
                self.advance();
                self.advance();
                return Token::new(TokenKind::Char, value.to_string(), line);
            }
        }

        // Malformed: the rest of the line becomes the error text
        let mut rest = String::from('\'');
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            rest.push(ch);
            self.advance();
        }
        Token::new(TokenKind::Error, rest.trim_end().to_string(), line)
    }

    /// Parse numeric literal; a single `.` makes it real
    fn number_literal(&mut self, first_digit: char, line: usize) -> Token {
        let mut text = String::new();
        text.push(first_digit);
        let mut seen_dot = false;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if seen_dot {
            TokenKind::Real
        } else {
            TokenKind::Integer
        };
        Token::new(kind, text, line)
    }

    /// Parse identifier or reserved word
    fn identifier_or_keyword(&mut self, first_char: char, line: usize) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if RESERVED_WORDS.contains(&ident.as_str()) {
            TokenKind::Reserved
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, ident, line)
    }

    /// Skip whitespace and `//` comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => {
                    self.skip_line_comment();
                }
                _ => break,
            }
        }
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }
}

/// Convenience wrapper: tokenize a whole source string
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
