//! The block graph arena and its builder.

use crate::block::{Attachment, Block, BlockId, Input, InputKind, Mutation};
use crate::kind::BlockKind;
use crate::{Error, Result};
use std::collections::{BTreeMap, HashSet};

/// An arena of blocks forming one workspace.
///
/// Blocks are only ever added through [`BlockGraph::block`], which attaches
/// already-built children to the new block. A child can be attached once, so
/// every connection chain is finite and acyclic.
#[derive(Debug, Clone, Default)]
pub struct BlockGraph {
    blocks: Vec<Block>,
}

impl BlockGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a new block of the given kind.
    pub fn block(&mut self, kind: BlockKind) -> BlockBuilder<'_> {
        BlockBuilder {
            graph: self,
            kind,
            fields: BTreeMap::new(),
            inputs: Vec::new(),
            next: None,
            comment: None,
            mutation: Mutation::default(),
        }
    }

    /// Looks up a block by id.
    ///
    /// # Errors
    /// Returns a graph error if the id does not belong to this graph.
    pub fn get(&self, id: BlockId) -> Result<&Block> {
        self.blocks
            .get(id.0)
            .ok_or_else(|| Error::Graph(format!("no block with id {id}")))
    }

    /// Number of blocks in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the graph has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over the top blocks (those not attached to a parent) in
    /// creation order.
    pub fn roots(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|block| block.parent.is_none())
    }

    /// Returns the block and everything reachable from it through inputs and
    /// `next` links, depth first.
    ///
    /// # Errors
    /// Returns a graph error if `id` is unknown.
    pub fn descendants(&self, id: BlockId) -> Result<Vec<&Block>> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let block = self.get(current)?;
            out.push(block);
            if let Some(next) = block.next {
                stack.push(next);
            }
            stack.extend(block.inputs.iter().rev().map(|input| input.target));
        }
        Ok(out)
    }

    /// Variable names used in the whole graph, or below `root` when given.
    ///
    /// Names are compared case-insensitively; the first spelling seen wins.
    ///
    /// # Errors
    /// Returns a graph error if `root` is unknown.
    pub fn all_variables(&self, root: Option<BlockId>) -> Result<Vec<String>> {
        let blocks: Vec<&Block> = match root {
            Some(id) => self.descendants(id)?,
            None => self.blocks.iter().collect(),
        };

        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for block in blocks {
            for name in block.own_variables() {
                if seen.insert(name.to_lowercase()) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    fn attach(&mut self, child: BlockId, parent: BlockId, role: Attachment) {
        if let Some(block) = self.blocks.get_mut(child.0) {
            block.parent = Some((parent, role));
        }
    }
}

/// Builder for a single block, returned by [`BlockGraph::block`].
pub struct BlockBuilder<'g> {
    graph: &'g mut BlockGraph,
    kind: BlockKind,
    fields: BTreeMap<String, String>,
    inputs: Vec<Input>,
    next: Option<BlockId>,
    comment: Option<String>,
    mutation: Mutation,
}

impl BlockBuilder<'_> {
    /// Sets a field value.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Connects a value block to the named input.
    #[must_use]
    pub fn value(mut self, slot: impl Into<String>, target: BlockId) -> Self {
        self.inputs.push(Input {
            name: slot.into(),
            kind: InputKind::Value,
            target,
        });
        self
    }

    /// Connects the first block of a statement sequence to the named input.
    #[must_use]
    pub fn statement(mut self, slot: impl Into<String>, target: BlockId) -> Self {
        self.inputs.push(Input {
            name: slot.into(),
            kind: InputKind::Statement,
            target,
        });
        self
    }

    /// Links the block that follows this one.
    #[must_use]
    pub const fn next(mut self, target: BlockId) -> Self {
        self.next = Some(target);
        self
    }

    #[must_use]
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    #[must_use]
    pub fn arguments<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mutation.arguments = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn items(mut self, count: usize) -> Self {
        self.mutation.items = Some(count);
        self
    }

    #[must_use]
    pub const fn else_if(mut self, count: usize) -> Self {
        self.mutation.else_if = Some(count);
        self
    }

    #[must_use]
    pub const fn has_else(mut self, has_else: bool) -> Self {
        self.mutation.has_else = has_else;
        self
    }

    #[must_use]
    pub const fn has_return(mut self, has_return: bool) -> Self {
        self.mutation.has_return = Some(has_return);
        self
    }

    /// Replaces the whole mutation record.
    #[must_use]
    pub fn mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Adds the block to the graph and attaches its children.
    ///
    /// # Errors
    /// Returns a graph error if a child is unknown, already attached, or
    /// plugged into a role its shape does not allow, or if the block itself
    /// has a `next` link but no next connection.
    pub fn build(self) -> Result<BlockId> {
        let Self {
            graph,
            kind,
            fields,
            inputs,
            next,
            comment,
            mutation,
        } = self;

        if next.is_some() && !kind.shape().has_previous() {
            return Err(Error::Graph(format!(
                "block kind {kind} has no next connection"
            )));
        }

        let id = BlockId(graph.blocks.len());
        let mut attachments: Vec<(BlockId, Attachment)> = inputs
            .iter()
            .map(|input| {
                let role = match input.kind {
                    InputKind::Value => Attachment::Value,
                    InputKind::Statement => Attachment::Statement,
                };
                (input.target, role)
            })
            .collect();
        if let Some(next) = next {
            attachments.push((next, Attachment::Next));
        }

        // Validate everything before mutating so a failed build leaves the
        // graph untouched.
        let mut seen = HashSet::new();
        for (child, role) in &attachments {
            if !seen.insert(*child) {
                return Err(Error::Graph(format!(
                    "block {child} is attached to the same parent twice"
                )));
            }
            let block = graph.get(*child)?;
            if block.parent.is_some() {
                return Err(Error::Graph(format!(
                    "block {child} ({}) is already attached",
                    block.kind
                )));
            }
            let shape = block.kind.shape();
            let allowed = match role {
                Attachment::Value => shape.has_output(),
                Attachment::Statement | Attachment::Next => shape.has_previous(),
            };
            if !allowed {
                return Err(Error::Graph(format!(
                    "block {child} ({}) cannot be attached to {kind} in this position",
                    block.kind
                )));
            }
        }

        for (child, role) in attachments {
            graph.attach(child, id, role);
        }

        graph.blocks.push(Block {
            id,
            kind,
            fields,
            inputs,
            next,
            comment,
            mutation,
            parent: None,
        });
        Ok(id)
    }
}
