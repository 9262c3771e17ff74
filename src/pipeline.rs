//! End-to-end compilation
//!
//! [`compile`] runs every phase in order and keeps each intermediate result,
//! so callers (the CLI subcommands, the explorer) can show whichever stage
//! they need. The first failing phase ends the run.

use crate::codegen;
use crate::config::CompilerConfig;
use crate::errors::CompileError;
use crate::optimizer;
use crate::parser::ast::Node;
use crate::parser::lexer::{tokenize, Token};
use crate::parser::parse;
use crate::semantic;
use crate::trace::EventSink;

/// Everything a successful compilation produced
#[derive(Debug, Clone)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub parsed: Node,
    pub optimized: Node,
    pub python: String,
}

/// Parse and validate only
pub fn check(
    source: &str,
    config: &CompilerConfig,
    sink: &mut dyn EventSink,
) -> Result<Node, CompileError> {
    let tokens = tokenize(source);
    tracing::debug!(count = tokens.len(), "tokenized source");

    let program = parse(tokens)?;
    semantic::validate(&program, config, sink)?;
    Ok(program)
}

/// Run lexer, parser, validator, optimizer and emitter over `source`
pub fn compile(
    source: &str,
    config: &CompilerConfig,
    sink: &mut dyn EventSink,
) -> Result<Compilation, CompileError> {
    let tokens = tokenize(source);
    tracing::debug!(count = tokens.len(), "tokenized source");

    let parsed = parse(tokens.clone())?;
    semantic::validate(&parsed, config, sink)?;
    let optimized = optimizer::rewrite(parsed.clone(), sink)?;
    let python = codegen::emit(&optimized, config);

    Ok(Compilation {
        tokens,
        parsed,
        optimized,
        python,
    })
}
