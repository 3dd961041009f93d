//! Reading program descriptions from disk.

use anyhow::{Context, Result};
use blockgen_core::ProgramDescription;
use std::fs;
use std::path::Path;

/// Parses a TOML program description.
///
/// # Errors
/// Returns an error if `source` is not a valid program description.
pub fn parse_program(source: &str) -> Result<ProgramDescription> {
    toml::from_str(source).with_context(|| "Failed to parse program description")
}

/// Reads and parses the program description at `path`.
///
/// Block types are not checked here; unknown tags surface when the
/// description is turned into a graph.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_program(path: impl AsRef<Path>) -> Result<ProgramDescription> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_program(&contents).with_context(|| format!("Invalid program in {}", path.display()))
}
