//! Project configuration and program loading for blockgen.

pub mod config;
pub mod program;

pub use config::{Config, GeneratorSection, Package};
pub use program::{load_program, parse_program};
