//! Graph traversal: block dispatch, comment scrubbing and chain following.

use super::core::Generator;
use super::language::{Fragment, Language};
use super::order::Precedence;
use super::utils::prefix_lines;
use blockgen_core::{Block, BlockId, Error, Result};
use tracing::trace;

impl<L: Language> Generator<'_, L> {
    /// Emits one block and everything chained below it.
    pub(crate) fn block_to_code(&mut self, id: BlockId) -> Result<Fragment<L::Order>> {
        let graph = self.graph;
        let block = graph.get(id)?;
        trace!(block = %id, kind = %block.kind, "emitting block");

        Ok(match L::emit(self, block)? {
            Fragment::Value { code, order } => Fragment::Value {
                code: self.scrub(block, &code)?,
                order,
            },
            Fragment::Statement(code) => Fragment::Statement(self.scrub(block, &code)?),
            Fragment::Managed => Fragment::Managed,
        })
    }

    /// Attaches comments to `code` and appends the code of the next block.
    ///
    /// Comments are only emitted for blocks that are not plugged into a value
    /// input: the block's own comment first, then every comment found inside
    /// its value inputs. Statement inputs carry their own comments.
    pub fn scrub(&mut self, block: &Block, code: &str) -> Result<String> {
        let mut out = String::new();
        if !block.is_plugged() {
            if let Some(comment) = block.comment.as_deref()
                && !comment.is_empty()
            {
                out.push_str(&prefix_lines(comment, L::COMMENT_PREFIX));
                out.push('\n');
            }
            for input in block.value_inputs() {
                let nested = self.nested_comments(input.target)?;
                if !nested.is_empty() {
                    out.push_str(&prefix_lines(&nested, L::COMMENT_PREFIX));
                }
            }
        }
        out.push_str(code);
        if let Some(next) = block.next {
            out.push_str(&self.statement_chain(next)?);
        }
        Ok(out)
    }

    /// Comments of `id` and all its descendants, one per line.
    fn nested_comments(&self, id: BlockId) -> Result<String> {
        let comments: Vec<&str> = self
            .graph
            .descendants(id)?
            .into_iter()
            .filter_map(|block| block.comment.as_deref())
            .filter(|comment| !comment.is_empty())
            .collect();
        if comments.is_empty() {
            return Ok(String::new());
        }
        let mut text = comments.join("\n");
        text.push('\n');
        Ok(text)
    }

    /// Code of a statement chain starting at `first`.
    fn statement_chain(&mut self, first: BlockId) -> Result<String> {
        match self.block_to_code(first)? {
            Fragment::Statement(code) => Ok(code),
            Fragment::Managed => Ok(String::new()),
            Fragment::Value { .. } => {
                let kind = self.graph.get(first)?.kind;
                Err(Error::Graph(format!(
                    "value block {first} ({kind}) cannot be used as a statement"
                )))
            }
        }
    }

    /// Code of the block in value input `slot`, wrapped in parentheses when
    /// its order binds no tighter than `required`. Returns `None` for an empty
    /// input.
    ///
    /// # Errors
    /// Returns [`Error::Graph`] if the input holds a statement block.
    pub fn value(&mut self, block: &Block, slot: &str, required: L::Order) -> Result<Option<String>> {
        let Some(child) = block.value_input(slot) else {
            return Ok(None);
        };
        match self.block_to_code(child)? {
            Fragment::Value { code, .. } if code.is_empty() => Ok(None),
            Fragment::Value { code, order } => {
                if order.needs_parens(required) {
                    Ok(Some(format!("({code})")))
                } else {
                    Ok(Some(code))
                }
            }
            Fragment::Statement(_) | Fragment::Managed => Err(Error::Graph(format!(
                "block {child} in input '{slot}' of {} does not produce a value",
                block.kind
            ))),
        }
    }

    /// Like [`value`](Self::value), falling back to `default` for an empty
    /// input.
    ///
    /// # Errors
    /// Returns [`Error::Graph`] if the input holds a statement block.
    pub fn value_or(
        &mut self,
        block: &Block,
        slot: &str,
        required: L::Order,
        default: &str,
    ) -> Result<String> {
        Ok(self
            .value(block, slot, required)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Indented code of the chain in statement input `slot`, or an empty
    /// string when the input is empty.
    ///
    /// # Errors
    /// Returns [`Error::Graph`] if the chain contains a value block.
    pub fn statement(&mut self, block: &Block, slot: &str) -> Result<String> {
        let Some(first) = block.statement_input(slot) else {
            return Ok(String::new());
        };
        let code = self.statement_chain(first)?;
        if code.is_empty() {
            Ok(code)
        } else {
            Ok(prefix_lines(&code, &self.options.indent))
        }
    }
}
