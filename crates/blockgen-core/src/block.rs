//! Blocks and their connections.

use crate::kind::BlockKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Index of a block inside its [`BlockGraph`](crate::BlockGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

/// The role a named input plays on its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Holds a child expression.
    Value,
    /// Holds the first block of a nested statement sequence.
    Statement,
}

/// A named slot with a connected child block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub kind: InputKind,
    pub target: BlockId,
}

/// How a block is plugged into its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    Value,
    Statement,
    Next,
}

/// Editor-side shape data that some block kinds carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mutation {
    /// Number of `ADDn` inputs on `lists_create_with` and `text_join`.
    pub items: Option<usize>,
    /// Number of `IFn`/`DOn` pairs after the first on `controls_if`.
    pub else_if: Option<usize>,
    /// Whether `controls_if` has an `ELSE` branch.
    pub has_else: bool,
    /// Argument names of a procedure definition or call.
    pub arguments: Vec<String>,
    /// Whether `procedures_ifreturn` returns a value.
    pub has_return: Option<bool>,
}

/// A node in the program graph.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub fields: BTreeMap<String, String>,
    pub inputs: Vec<Input>,
    pub next: Option<BlockId>,
    pub comment: Option<String>,
    pub mutation: Mutation,
    pub(crate) parent: Option<(BlockId, Attachment)>,
}

impl Block {
    /// Returns the value of a field, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns the block connected to the named value input.
    #[must_use]
    pub fn value_input(&self, name: &str) -> Option<BlockId> {
        self.find_input(name, InputKind::Value)
    }

    /// Returns the first block of the named statement input.
    #[must_use]
    pub fn statement_input(&self, name: &str) -> Option<BlockId> {
        self.find_input(name, InputKind::Statement)
    }

    fn find_input(&self, name: &str, kind: InputKind) -> Option<BlockId> {
        self.inputs
            .iter()
            .find(|input| input.kind == kind && input.name == name)
            .map(|input| input.target)
    }

    /// Iterates over the connected value inputs in slot order.
    pub fn value_inputs(&self) -> impl Iterator<Item = &Input> {
        self.inputs
            .iter()
            .filter(|input| input.kind == InputKind::Value)
    }

    /// Returns the parent block and the role this block plays in it.
    #[must_use]
    pub const fn parent(&self) -> Option<(BlockId, Attachment)> {
        self.parent
    }

    /// Returns true if this block is plugged into a parent's value input.
    #[must_use]
    pub fn is_plugged(&self) -> bool {
        matches!(self.parent, Some((_, Attachment::Value)))
    }

    /// Number of `ADDn` items, inferred from the inputs when not recorded.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.mutation
            .items
            .unwrap_or_else(|| self.highest_numbered("ADD").map_or(0, |n| n + 1))
    }

    /// Number of else-if branches, inferred from the inputs when not recorded.
    #[must_use]
    pub fn else_if_count(&self) -> usize {
        self.mutation.else_if.unwrap_or_else(|| {
            ["IF", "DO"]
                .iter()
                .filter_map(|prefix| self.highest_numbered(prefix))
                .max()
                .unwrap_or(0)
        })
    }

    /// Whether a `controls_if` block has an else branch.
    #[must_use]
    pub fn has_else(&self) -> bool {
        self.mutation.has_else || self.statement_input("ELSE").is_some()
    }

    /// Whether a `procedures_ifreturn` block returns a value.
    #[must_use]
    pub fn has_return_value(&self) -> bool {
        self.mutation
            .has_return
            .unwrap_or_else(|| self.value_input("VALUE").is_some())
    }

    /// Procedure argument names recorded on this block.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.mutation.arguments
    }

    fn highest_numbered(&self, prefix: &str) -> Option<usize> {
        self.inputs
            .iter()
            .filter_map(|input| input.name.strip_prefix(prefix)?.parse::<usize>().ok())
            .max()
    }

    /// Variable names this block refers to directly.
    pub(crate) fn own_variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        if self.kind.references_variable()
            && let Some(name) = self.field("VAR")
        {
            names.push(name);
        }
        if self.kind.is_procedure_definition() {
            names.extend(self.mutation.arguments.iter().map(String::as_str));
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(kind: BlockKind, inputs: &[(&str, InputKind)]) -> Block {
        Block {
            id: BlockId(0),
            kind,
            fields: BTreeMap::new(),
            inputs: inputs
                .iter()
                .enumerate()
                .map(|(n, (name, kind))| Input {
                    name: (*name).to_string(),
                    kind: *kind,
                    target: BlockId(n + 1),
                })
                .collect(),
            next: None,
            comment: None,
            mutation: Mutation::default(),
            parent: None,
        }
    }

    #[test]
    fn test_item_count_inferred() {
        let b = block(
            BlockKind::ListsCreateWith,
            &[("ADD0", InputKind::Value), ("ADD2", InputKind::Value)],
        );
        assert_eq!(b.item_count(), 3);
    }

    #[test]
    fn test_item_count_from_mutation() {
        let mut b = block(BlockKind::TextJoin, &[("ADD0", InputKind::Value)]);
        b.mutation.items = Some(4);
        assert_eq!(b.item_count(), 4);
    }

    #[test]
    fn test_else_if_count_inferred() {
        let b = block(
            BlockKind::ControlsIf,
            &[
                ("IF0", InputKind::Value),
                ("DO0", InputKind::Statement),
                ("DO2", InputKind::Statement),
                ("ELSE", InputKind::Statement),
            ],
        );
        assert_eq!(b.else_if_count(), 2);
        assert!(b.has_else());
    }
}
