// AST (Abstract Syntax Tree) definitions for the mini-C compiler

use std::fmt;

/// Primitive types supported by the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    Int,
    Real,
    Char,
}

impl TypeName {
    /// Map a reserved word to a type, if it names one
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "int" => Some(TypeName::Int),
            "real" => Some(TypeName::Real),
            "char" => Some(TypeName::Char),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Real => "real",
            TypeName::Char => "char",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a function or variable.
///
/// A leaf: it owns no child nodes, so the generic traversals never descend
/// into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: TypeName,
    pub line: usize,
}

/// Binary operators the optimizer knows how to fold.
///
/// The grammar only produces `Add`; the others exist so that trees built by
/// other front-ends still fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// AST nodes. Every variant owns its children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Root: the single top-level function declaration
    Program {
        function: Box<Node>,
    },
    FunctionDecl {
        return_type: TypeRef,
        name: String,
        body: Vec<Node>,
        line: usize,
    },

    // Statements
    VarDecl {
        var_type: TypeRef,
        name: String,
        init: Option<Box<Node>>,
        line: usize,
    },
    Assign {
        target: String,
        expr: Box<Node>,
        line: usize,
    },
    Return {
        expr: Box<Node>,
        line: usize,
    },
    CallStmt {
        callee: String,
        args: Vec<Node>, // at most one element
        line: usize,
    },

    // Expressions
    BinaryOp {
        op: BinOp,
        left: Box<Node>,
        right: Box<Node>,
        line: usize,
    },
    Identifier {
        name: String,
        line: usize,
    },
    /// Numeric literal kept as source text; a `.` marks it as real
    NumberLit {
        text: String,
        line: usize,
    },
    StringLit {
        value: String,
        line: usize,
    },
    CharLit {
        value: char,
        line: usize,
    },
}

impl Node {
    /// Get the source line of this node
    pub fn line(&self) -> usize {
        match self {
            Node::Program { function } => function.line(),
            Node::FunctionDecl { line, .. }
            | Node::VarDecl { line, .. }
            | Node::Assign { line, .. }
            | Node::Return { line, .. }
            | Node::CallStmt { line, .. }
            | Node::BinaryOp { line, .. }
            | Node::Identifier { line, .. }
            | Node::NumberLit { line, .. }
            | Node::StringLit { line, .. }
            | Node::CharLit { line, .. } => *line,
        }
    }

    /// Variant name, used by the tree printer and in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Program { .. } => "Program",
            Node::FunctionDecl { .. } => "FunctionDecl",
            Node::VarDecl { .. } => "VarDecl",
            Node::Assign { .. } => "Assign",
            Node::Return { .. } => "Return",
            Node::CallStmt { .. } => "CallStmt",
            Node::BinaryOp { .. } => "BinaryOp",
            Node::Identifier { .. } => "Identifier",
            Node::NumberLit { .. } => "NumberLit",
            Node::StringLit { .. } => "StringLit",
            Node::CharLit { .. } => "CharLit",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Node::NumberLit { .. })
    }

    /// The function declaration under a `Program` root
    pub fn function(&self) -> Option<&Node> {
        match self {
            Node::Program { function } => Some(function),
            _ => None,
        }
    }

    /// Visit every direct child node in field-declaration order.
    ///
    /// Child sequences are visited element by element. Scalar fields are
    /// skipped. The first error stops the walk.
    pub fn try_for_each_child<E>(
        &self,
        mut f: impl FnMut(&Node) -> Result<(), E>,
    ) -> Result<(), E> {
        match self {
            Node::Program { function } => f(function),
            Node::FunctionDecl { body, .. } => body.iter().try_for_each(f),
            Node::VarDecl { init, .. } => match init {
                Some(init) => f(init),
                None => Ok(()),
            },
            Node::Assign { expr, .. } | Node::Return { expr, .. } => f(expr),
            Node::CallStmt { args, .. } => args.iter().try_for_each(f),
            Node::BinaryOp { left, right, .. } => {
                f(left)?;
                f(right)
            }
            Node::Identifier { .. }
            | Node::NumberLit { .. }
            | Node::StringLit { .. }
            | Node::CharLit { .. } => Ok(()),
        }
    }

    /// Replace every direct child node with `f(child)`, consuming `self`.
    ///
    /// Sequences keep their length and order; single child slots are replaced
    /// by whatever node `f` returns. Leaves come back unchanged.
    pub fn try_map_children<E>(
        self,
        mut f: impl FnMut(Node) -> Result<Node, E>,
    ) -> Result<Node, E> {
        Ok(match self {
            Node::Program { function } => Node::Program {
                function: Box::new(f(*function)?),
            },
            Node::FunctionDecl {
                return_type,
                name,
                body,
                line,
            } => Node::FunctionDecl {
                return_type,
                name,
                body: body.into_iter().map(&mut f).collect::<Result<_, _>>()?,
                line,
            },
            Node::VarDecl {
                var_type,
                name,
                init,
                line,
            } => Node::VarDecl {
                var_type,
                name,
                init: match init {
                    Some(init) => Some(Box::new(f(*init)?)),
                    None => None,
                },
                line,
            },
            Node::Assign { target, expr, line } => Node::Assign {
                target,
                expr: Box::new(f(*expr)?),
                line,
            },
            Node::Return { expr, line } => Node::Return {
                expr: Box::new(f(*expr)?),
                line,
            },
            Node::CallStmt { callee, args, line } => Node::CallStmt {
                callee,
                args: args.into_iter().map(&mut f).collect::<Result<_, _>>()?,
                line,
            },
            Node::BinaryOp {
                op,
                left,
                right,
                line,
            } => {
                let left = Box::new(f(*left)?);
                let right = Box::new(f(*right)?);
                Node::BinaryOp {
                    op,
                    left,
                    right,
                    line,
                }
            }
            leaf @ (Node::Identifier { .. }
            | Node::NumberLit { .. }
            | Node::StringLit { .. }
            | Node::CharLit { .. }) => leaf,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_children_visited_in_field_order() {
        let node = Node::BinaryOp {
            op: BinOp::Add,
            left: Box::new(ident("a")),
            right: Box::new(ident("b")),
            line: 1,
        };

        let mut seen = Vec::new();
        node.try_for_each_child(|child| {
            if let Node::Identifier { name, .. } = child {
                seen.push(name.clone());
            }
            Ok::<(), ()>(())
        })
        .unwrap();

        assert_eq!(seen, vec!["a", "b"]);
    }

    #[test]
    fn test_for_each_child_stops_at_first_error() {
        let node = Node::BinaryOp {
            op: BinOp::Add,
            left: Box::new(ident("a")),
            right: Box::new(ident("b")),
            line: 3,
        };
        let mut calls = 0;
        let result = node.try_for_each_child(|_| {
            calls += 1;
            Err("stop")
        });

        assert_eq!(result, Err("stop"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_map_children_replaces_every_slot() {
        let node = Node::VarDecl {
            var_type: TypeRef {
                name: TypeName::Int,
                line: 1,
            },
            name: "x".to_string(),
            init: Some(Box::new(ident("y"))),
            line: 1,
        };

        let mapped = node
            .try_map_children(|_| Ok::<_, ()>(num("7")))
            .unwrap();

        match mapped {
            Node::VarDecl { name, init, .. } => {
                assert_eq!(name, "x");
                assert_eq!(init.as_deref(), Some(&num("7")));
            }
            other => panic!("Expected VarDecl, got {:?}", other),
        }
    }

    #[test]
    fn test_leaves_map_to_themselves() {
        let leaf = Node::CharLit {
            value: 'z',
            line: 2,
        };
        let mapped = leaf
            .clone()
            .try_map_children(|_| Err::<Node, _>("never called"))
            .unwrap();
        assert_eq!(mapped, leaf);
    }

    #[test]
    fn test_type_keywords() {
        assert_eq!(TypeName::from_keyword("real"), Some(TypeName::Real));
        assert_eq!(TypeName::from_keyword("void"), None);
        assert_eq!(BinOp::from_symbol("/"), Some(BinOp::Div));
    }
}
