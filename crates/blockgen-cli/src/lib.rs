//! blockgen CLI library for testing and reusability.

pub mod compiler;
pub mod pipeline;
pub mod utils;

pub use blockgen_utils::Config;
pub use compiler::Compiler;
