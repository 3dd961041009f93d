//! Core types for the blockgen code generators.
//!
//! This crate provides the block graph model shared by every generator
//! target, the program description format used to load a graph from disk,
//! and the error type used across all crates.

pub mod block;
pub mod description;
pub mod error;
pub mod graph;
pub mod kind;
pub mod target;

pub use block::{Attachment, Block, BlockId, Input, InputKind, Mutation};
pub use description::{BlockDescription, ProgramDescription};
pub use error::{Error, Result};
pub use graph::{BlockBuilder, BlockGraph};
pub use kind::{BlockKind, Shape};
pub use target::Target;
