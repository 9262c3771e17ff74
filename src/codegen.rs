//! Python emitter
//!
//! Renders a (validated, optimized) program as a Python module. Each
//! statement becomes one line; expressions are fully parenthesised so no
//! precedence rules need to be re-derived on the Python side.

use crate::config::CompilerConfig;
use crate::parser::ast::Node;

const INDENT: &str = "    ";

/// Turns a program tree into Python source
pub struct PythonEmitter<'c> {
    config: &'c CompilerConfig,
    out: String,
    depth: usize,
}

impl<'c> PythonEmitter<'c> {
    pub fn new(config: &'c CompilerConfig) -> Self {
        PythonEmitter {
            config,
            out: String::new(),
            depth: 0,
        }
    }

    /// Emit `program` and return the module text
    pub fn emit(mut self, program: &Node) -> String {
        self.statement(program);

        if self.config.main_guard {
            if let Some(Node::FunctionDecl { name, .. }) = program.function() {
                self.out.push_str("\n\nif __name__ == '__main__':\n");
                self.line(&format!("{}{}()", INDENT, name));
            }
        }

        self.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn statement(&mut self, node: &Node) {
        match node {
            Node::Program { function } => self.statement(function),
            Node::FunctionDecl { name, body, .. } => {
                self.line(&format!("def {}():", name));
                self.depth += 1;
                if body.is_empty() {
                    self.line("pass");
                }
                for statement in body {
                    self.statement(statement);
                }
                self.depth -= 1;
            }
            Node::VarDecl { name, init, .. } => {
                let value = match init {
                    Some(init) => self.expression(init),
                    None => "None".to_string(),
                };
                self.line(&format!("{} = {}", name, value));
            }
            Node::Assign { target, expr, .. } => {
                let value = self.expression(expr);
                self.line(&format!("{} = {}", target, value));
            }
            Node::Return { expr, .. } => {
                let value = self.expression(expr);
                self.line(&format!("return {}", value));
            }
            Node::CallStmt { callee, args, .. } => {
                let callee = self
                    .config
                    .intrinsics
                    .emitted_name(callee)
                    .unwrap_or(callee);
                let args: Vec<String> = args.iter().map(|arg| self.expression(arg)).collect();
                let call = format!("{}({})", callee, args.join(", "));
                self.line(&call);
            }
            // A bare expression in statement position
            _ => {
                let value = self.expression(node);
                self.line(&value);
            }
        }
    }

    fn expression(&self, node: &Node) -> String {
        match node {
            Node::BinaryOp {
                op, left, right, ..
            } => format!(
                "({} {} {})",
                self.expression(left),
                op,
                self.expression(right)
            ),
            Node::Identifier { name, .. } => name.clone(),
            Node::NumberLit { text, .. } => text.clone(),
            Node::StringLit { value, .. } => format!("\"{}\"", value),
            Node::CharLit { value, .. } => match value {
                '"' | '\\' => format!("\"\\{}\"", value),
                _ => format!("\"{}\"", value),
            },
            // Statements never appear inside expressions
            _ => String::new(),
        }
    }
}

/// Emit `program` as Python using `config`
pub fn emit(program: &Node, config: &CompilerConfig) -> String {
    tracing::info!("emitting python");
    PythonEmitter::new(config).emit(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn emit_source(source: &str) -> String {
        let program = Parser::from_source(source).parse_program().unwrap();
        let config = CompilerConfig {
            main_guard: false,
            ..CompilerConfig::default()
        };
        emit(&program, &config)
    }

    #[test]
    fn test_statements() {
        let python = emit_source("int main() { int x; x = 1 + y; printf(x); return x; }");

        assert_eq!(
            python,
            "def main():\n    x = None\n    x = (1 + y)\n    print(x)\n    return x\n"
        );
    }

    #[test]
    fn test_empty_body_is_pass() {
        assert_eq!(emit_source("char f() { }"), "def f():\n    pass\n");
    }

    #[test]
    fn test_literals_are_double_quoted() {
        let python = emit_source("int main() { char c = '\"'; printf(\"it's\"); }");

        assert_eq!(
            python,
            "def main():\n    c = \"\\\"\"\n    print(\"it's\")\n"
        );
    }

    #[test]
    fn test_unknown_callee_kept() {
        assert_eq!(
            emit_source("int main() { launch(); }"),
            "def main():\n    launch()\n"
        );
    }
}
