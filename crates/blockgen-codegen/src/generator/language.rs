//! The seam between the shared generator and a concrete target.

use super::core::Generator;
use super::order::Precedence;
use blockgen_core::{Block, Result};

/// Output of a single block emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<O> {
    /// An expression and the precedence of its outermost operator.
    Value { code: String, order: O },
    /// Newline-terminated statement text.
    Statement(String),
    /// The emitter registered its output elsewhere (procedure definitions).
    Managed,
}

impl<O> Fragment<O> {
    pub fn value(code: impl Into<String>, order: O) -> Self {
        Self::Value {
            code: code.into(),
            order,
        }
    }

    pub fn statement(code: impl Into<String>) -> Self {
        Self::Statement(code.into())
    }
}

/// A target language profile plus its per-block emitters.
pub trait Language: Sized {
    type Order: Precedence;

    /// Short name used in log output.
    const NAME: &'static str;
    /// Identifiers the name database must never issue.
    const RESERVED_WORDS: &'static [&'static str];
    /// Line-comment prefix including the trailing space.
    const COMMENT_PREFIX: &'static str;

    /// Encodes `text` as a string literal.
    fn quote(text: &str) -> String;

    /// Turns a top-level expression into a statement.
    fn scrub_naked_value(line: &str) -> String;

    /// Declaration text for every workspace variable, or `None` if there are
    /// none.
    fn declare_variables(names: &[String]) -> Option<String>;

    /// Emits one block. Implementations match exhaustively on the block kind.
    ///
    /// # Errors
    /// Returns an error for field values the target has no rule for.
    fn emit(generator: &mut Generator<'_, Self>, block: &Block) -> Result<Fragment<Self::Order>>;
}
