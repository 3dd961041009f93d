//! Error types and result aliases for blockgen.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for block graph construction and code generation.
///
/// Generation never recovers from an error: the first one aborts the run and
/// no partial output is produced.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown block type '{0}'")]
    #[diagnostic(
        code(blockgen::unknown_block_type),
        help("block types use the editor's tags, e.g. `controls_if` or `lists_getIndex`")
    )]
    UnknownBlockType(String),

    #[error("Malformed block graph: {0}")]
    #[diagnostic(code(blockgen::graph))]
    Graph(String),

    #[error("Block '{kind}' is missing required field '{field}'")]
    #[diagnostic(code(blockgen::missing_field))]
    MissingField { kind: &'static str, field: String },

    #[error("Block '{kind}' has invalid value '{value}' in field '{field}'")]
    #[diagnostic(code(blockgen::invalid_field))]
    InvalidField {
        kind: &'static str,
        field: String,
        value: String,
    },

    #[error("Unknown operator '{value}' in field '{field}' of block '{kind}'")]
    #[diagnostic(
        code(blockgen::unknown_operator),
        help("the dropdown value is not one this generator knows how to emit")
    )]
    UnknownOperator {
        kind: &'static str,
        field: String,
        value: String,
    },

    #[error("Unhandled combination in block '{kind}': {detail}")]
    #[diagnostic(
        code(blockgen::unhandled_combination),
        help("this combination of dropdown values has no code generation rule")
    )]
    UnhandledCombination { kind: &'static str, detail: String },
}

/// Result type alias using the blockgen Error type.
pub type Result<T> = std::result::Result<T, Error>;
