//! Utility functions and constants shared across the CLI.

use anyhow::{Context, Result};
use blockgen_utils::Config;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Program description of a project, relative to its root.
pub const MAIN_PROGRAM_PATH: &str = "src/main.toml";

/// Program description written into new projects.
pub const MAIN_PROGRAM_TEMPLATE: &str = r#"# Prints a greeting.
[[block]]
type = "text_print"
[block.values.TEXT]
type = "text"
fields = { TEXT = "Hello, blockgen!" }
"#;

/// Finds the blockgen project root and config.
///
/// # Errors
/// Returns an error if not in a blockgen project directory.
pub fn find_project() -> Result<(Config, PathBuf)> {
    Config::find().with_context(|| "Not in a blockgen project directory")
}

/// Prints a status message with colored output.
pub fn print_status(status: &str, message: &str) {
    println!("{:>12} {message}", status.green().bold());
}

/// Prints a status message with project info.
pub fn print_project_status(status: &str, config: &Config, path: &Path) {
    println!(
        "{:>12} {} v{} ({})",
        status.green().bold(),
        config.package.name,
        config.package.version,
        path.display()
    );
}
