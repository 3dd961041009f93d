//! Generation pipeline stages.
//!
//! Core errors are rendered through miette on stderr before being turned into
//! a short anyhow error for the caller.

use anyhow::Result;
use blockgen_codegen::GeneratorOptions;
use blockgen_core::{BlockGraph, ProgramDescription, Target};
use blockgen_utils::{Config, load_program};
use std::path::Path;
use tracing::debug;

/// Generator options taken from the `[generator]` section.
#[must_use]
pub fn options(config: &Config) -> GeneratorOptions {
    GeneratorOptions {
        indent: config.generator.indent.clone(),
        loop_trap: config.generator.loop_trap.clone(),
    }
}

fn report(error: blockgen_core::Error, stage: &str) -> anyhow::Error {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
    anyhow::anyhow!("{stage} failed")
}

/// Turns a program description into a block graph.
///
/// # Errors
/// Returns an error if the description names unknown blocks or connects
/// blocks in ways the graph does not allow.
pub fn build_graph(program: ProgramDescription) -> Result<BlockGraph> {
    program
        .into_graph()
        .map_err(|e| report(e, "Loading the block graph"))
}

/// Generates source code for `graph`.
///
/// # Errors
/// Returns an error if any block cannot be generated.
pub fn generate(graph: &BlockGraph, target: Target, options: &GeneratorOptions) -> Result<String> {
    blockgen_codegen::generate(graph, target, options)
        .map_err(|e| report(e, "Code generation"))
}

/// Loads the program at `path` and generates code for it.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn build_pipeline(path: &Path, target: Target, options: &GeneratorOptions) -> Result<String> {
    let program = load_program(path)?;
    let graph = build_graph(program)?;
    debug!(blocks = graph.len(), %target, "program loaded");
    generate(&graph, target, options)
}

/// Runs every stage without keeping the output.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn check_pipeline(path: &Path, target: Target, options: &GeneratorOptions) -> Result<()> {
    build_pipeline(path, target, options).map(drop)
}
