//! Source code generation from block graphs.
//!
//! This crate turns a [`BlockGraph`] into Python or JavaScript source. The
//! shared machinery (name database, precedence tables, helper registry and
//! graph walker) lives in [`generator`]; each target supplies its emitters
//! by implementing [`Language`].

pub mod generator;
pub mod javascript;
pub mod python;

pub use generator::{Fragment, Generator, GeneratorOptions, Language};
pub use javascript::JavaScript;
pub use python::Python;

use blockgen_core::{BlockGraph, Result, Target};

/// Generates a complete program for `target` from every top-level block in
/// `graph`.
///
/// # Errors
/// Returns the first error reported by any block emitter.
///
/// # Examples
/// ```
/// use blockgen_codegen::{generate, GeneratorOptions};
/// use blockgen_core::{BlockGraph, BlockKind, Target};
///
/// let mut graph = BlockGraph::new();
/// let text = graph.block(BlockKind::Text).field("TEXT", "Hello").build().unwrap();
/// graph.block(BlockKind::TextPrint).value("TEXT", text).build().unwrap();
///
/// let code = generate(&graph, Target::Python, &GeneratorOptions::default()).unwrap();
/// assert_eq!(code, "print('Hello')\n");
/// ```
pub fn generate(graph: &BlockGraph, target: Target, options: &GeneratorOptions) -> Result<String> {
    match target {
        Target::Python => Generator::<Python>::new(graph, options.clone()).generate(),
        Target::JavaScript => Generator::<JavaScript>::new(graph, options.clone()).generate(),
    }
}
