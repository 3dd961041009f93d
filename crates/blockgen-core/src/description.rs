//! Serde model of a program description.
//!
//! A program description is a plain nested-table rendering of a block graph:
//! every table names a block type and carries its fields, value inputs,
//! statement inputs and following block.

use crate::block::{BlockId, Mutation};
use crate::graph::BlockGraph;
use crate::kind::BlockKind;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The top-level blocks of a program, in workspace order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDescription {
    #[serde(rename = "block", default)]
    pub blocks: Vec<BlockDescription>,
}

/// One block and everything attached below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDescription {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, BlockDescription>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub statements: BTreeMap<String, BlockDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Box<BlockDescription>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation: Option<Mutation>,
}

impl ProgramDescription {
    /// Builds a block graph from this description.
    ///
    /// # Errors
    /// Returns an error for unknown block types or connections the graph
    /// builder rejects.
    pub fn into_graph(self) -> Result<BlockGraph> {
        let mut graph = BlockGraph::new();
        for block in self.blocks {
            block.insert_into(&mut graph)?;
        }
        Ok(graph)
    }
}

impl BlockDescription {
    /// Adds this block and its children to `graph`, returning the new id.
    ///
    /// # Errors
    /// Returns an error for unknown block types or rejected connections.
    pub fn insert_into(self, graph: &mut BlockGraph) -> Result<BlockId> {
        let kind: BlockKind = self.kind.parse()?;

        let mut values = Vec::with_capacity(self.values.len());
        for (slot, child) in sorted_slots(self.values) {
            values.push((slot, child.insert_into(graph)?));
        }
        let mut statements = Vec::with_capacity(self.statements.len());
        for (slot, child) in sorted_slots(self.statements) {
            statements.push((slot, child.insert_into(graph)?));
        }
        let next = self
            .next
            .map(|next| next.insert_into(graph))
            .transpose()?;

        let mut builder = graph
            .block(kind)
            .mutation(self.mutation.unwrap_or_default());
        for (name, value) in self.fields {
            builder = builder.field(name, value);
        }
        for (slot, id) in values {
            builder = builder.value(slot, id);
        }
        for (slot, id) in statements {
            builder = builder.statement(slot, id);
        }
        if let Some(next) = next {
            builder = builder.next(next);
        }
        if let Some(comment) = self.comment {
            builder = builder.comment(comment);
        }
        builder.build()
    }
}

/// Orders slots so that numbered inputs sort numerically (`ADD2` before
/// `ADD10`).
fn sorted_slots(slots: BTreeMap<String, BlockDescription>) -> Vec<(String, BlockDescription)> {
    let mut slots: Vec<_> = slots.into_iter().collect();
    slots.sort_by(|(a, _), (b, _)| slot_key(a).cmp(&slot_key(b)));
    slots
}

fn slot_key(slot: &str) -> (&str, Option<usize>) {
    let prefix = slot.trim_end_matches(|c: char| c.is_ascii_digit());
    (prefix, slot[prefix.len()..].parse().ok())
}
