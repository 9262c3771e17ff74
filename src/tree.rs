//! Indented outline of a tree
//!
//! Used by `minic ast` and the explorer's tree pane. Each node gets one line;
//! child slots are labelled with the field they sit in, and sequence elements
//! with their index:
//!
//! ```text
//! Program
//!   function: FunctionDecl main: int (line 1)
//!     body[0]: Return (line 1)
//!       expr: NumberLit 0 (line 1)
//! ```

use crate::parser::ast::Node;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Render `node` and its subtree, one node per line
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    render_into(&mut out, node, None, 0);
    out
}

fn render_into(out: &mut String, node: &Node, label: Option<&str>, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    if let Some(label) = label {
        out.push_str(label);
        out.push_str(": ");
    }
    out.push_str(&summary(node));
    out.push('\n');

    for (label, child) in labelled_children(node) {
        render_into(out, child, Some(&label), depth + 1);
    }
}

/// One-line description of a node without its children
pub fn summary(node: &Node) -> String {
    let mut text = node.kind_name().to_string();
    let _ = match node {
        Node::Program { .. } => return text,
        Node::FunctionDecl {
            name, return_type, ..
        } => write!(text, " {}: {}", name, return_type.name),
        Node::VarDecl { name, var_type, .. } => write!(text, " {}: {}", name, var_type.name),
        Node::Assign { target, .. } => write!(text, " {}", target),
        Node::CallStmt { callee, .. } => write!(text, " {}", callee),
        Node::BinaryOp { op, .. } => write!(text, " {}", op),
        Node::Identifier { name, .. } => write!(text, " {}", name),
        Node::NumberLit { text: value, .. } => write!(text, " {}", value),
        Node::StringLit { value, .. } => write!(text, " {:?}", value),
        Node::CharLit { value, .. } => write!(text, " {:?}", value),
        Node::Return { .. } => Ok(()),
    };
    let _ = write!(text, " (line {})", node.line());
    text
}

fn labelled_children(node: &Node) -> Vec<(String, &Node)> {
    match node {
        Node::Program { function } => vec![("function".to_string(), function.as_ref())],
        Node::FunctionDecl { body, .. } => indexed("body", body),
        Node::VarDecl { init, .. } => init
            .iter()
            .map(|init| ("init".to_string(), init.as_ref()))
            .collect(),
        Node::Assign { expr, .. } | Node::Return { expr, .. } => {
            vec![("expr".to_string(), expr.as_ref())]
        }
        Node::CallStmt { args, .. } => indexed("args", args),
        Node::BinaryOp { left, right, .. } => vec![
            ("left".to_string(), left.as_ref()),
            ("right".to_string(), right.as_ref()),
        ],
        Node::Identifier { .. }
        | Node::NumberLit { .. }
        | Node::StringLit { .. }
        | Node::CharLit { .. } => Vec::new(),
    }
}

fn indexed<'a>(field: &str, nodes: &'a [Node]) -> Vec<(String, &'a Node)> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| (format!("{}[{}]", field, index), node))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    #[test]
    fn test_render_outline() {
        let program = Parser::from_source(
            "int main() {\n  char c = 'a';\n  printf(\"hi\");\n  return c + 1;\n}",
        )
        .parse_program()
        .unwrap();

        let expected = "\
Program
  function: FunctionDecl main: int (line 1)
    body[0]: VarDecl c: char (line 2)
      init: CharLit 'a' (line 2)
    body[1]: CallStmt printf (line 3)
      args[0]: StringLit \"hi\" (line 3)
    body[2]: Return (line 4)
      expr: BinaryOp + (line 4)
        left: Identifier c (line 4)
        right: NumberLit 1 (line 4)
";
        assert_eq!(render(&program), expected);
    }

    #[test]
    fn test_uninitialized_declaration_has_no_children() {
        let program = Parser::from_source("real main() { real r; }")
            .parse_program()
            .unwrap();
        let rendered = render(&program);

        assert!(rendered.ends_with("    body[0]: VarDecl r: real (line 1)\n"));
    }
}
