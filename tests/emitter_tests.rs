// Integration tests for Python emission

use minic::codegen::PythonEmitter;
use minic::config::{CompilerConfig, Intrinsic, Intrinsics};
use minic::parser::ast::{BinOp, Node};
use minic::trace::NullSink;

fn build(source: &str, config: &CompilerConfig) -> String {
    minic::compile(source, config, &mut NullSink)
        .expect("compilation failed")
        .python
}

fn without_guard() -> CompilerConfig {
    CompilerConfig {
        main_guard: false,
        ..CompilerConfig::default()
    }
}

#[test]
fn test_main_guard_calls_declared_function() {
    let python = build("int entry() { return 0; }", &CompilerConfig::default());

    assert_eq!(
        python,
        "def entry():\n    return 0\n\n\nif __name__ == '__main__':\n    entry()\n"
    );
}

#[test]
fn test_program_with_every_statement_kind() {
    let source = r#"
        // greet and count
        int main() {
            char c = 'k';
            real r;
            r = 2.5 + 0.5;
            printf("hello");
            printf(c);
            printf();
            return r + 1;
        }
    "#;

    let expected = "\
def main():
    c = \"k\"
    r = None
    r = 3
    print(\"hello\")
    print(c)
    print()
    return (r + 1)
";
    assert_eq!(build(source, &without_guard()), expected);
}

#[test]
fn test_custom_intrinsics_replace_default() {
    let config = CompilerConfig {
        intrinsics: Intrinsics::new([Intrinsic::new("puts", "print")]),
        main_guard: false,
        ..CompilerConfig::default()
    };

    let python = build("int main() { puts(\"x\"); }", &config);
    assert_eq!(python, "def main():\n    print(\"x\")\n");

    // printf is no longer special, but callees are never resolved
    let python = build("int main() { printf(\"x\"); }", &config);
    assert_eq!(python, "def main():\n    printf(\"x\")\n");
}

#[test]
fn test_local_may_shadow_intrinsic() {
    // Intrinsics live in the global scope; locals are one level down
    let python = build(
        "int main() { int printf = 1; return printf; }",
        &without_guard(),
    );
    assert_eq!(python, "def main():\n    printf = 1\n    return printf\n");
}

#[test]
fn test_unfolded_expression_keeps_parentheses() {
    let tree = Node::Program {
        function: Box::new(Node::FunctionDecl {
            return_type: minic::parser::ast::TypeRef {
                name: minic::parser::ast::TypeName::Int,
                line: 1,
            },
            name: "f".to_string(),
            body: vec![Node::Return {
                expr: Box::new(Node::BinaryOp {
                    op: BinOp::Mul,
                    left: Box::new(Node::Identifier {
                        name: "a".to_string(),
                        line: 1,
                    }),
                    right: Box::new(Node::BinaryOp {
                        op: BinOp::Sub,
                        left: Box::new(Node::Identifier {
                            name: "b".to_string(),
                            line: 1,
                        }),
                        right: Box::new(Node::NumberLit {
                            text: "1".to_string(),
                            line: 1,
                        }),
                        line: 1,
                    }),
                    line: 1,
                }),
                line: 1,
            }],
            line: 1,
        }),
    };

    let config = without_guard();
    let python = PythonEmitter::new(&config).emit(&tree);
    assert_eq!(python, "def f():\n    return (a * (b - 1))\n");
}
