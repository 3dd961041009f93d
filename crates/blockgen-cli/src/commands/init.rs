//! Implementation of the `blockgen init` command.

use crate::utils::{MAIN_PROGRAM_PATH, MAIN_PROGRAM_TEMPLATE, print_status};
use anyhow::{Context, Result};
use blockgen_utils::Config;
use blockgen_utils::config::CONFIG_FILE;
use std::fs;
use std::path::Path;

/// Executes the `init` command to initialize a project in the current
/// directory.
///
/// # Errors
/// Returns an error if blockgen.toml already exists or if files cannot be
/// created.
pub fn execute() -> Result<()> {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

    if Path::new(CONFIG_FILE).exists() {
        anyhow::bail!("{CONFIG_FILE} already exists in current directory");
    }

    let project_name = current_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("blockgen-project");

    fs::create_dir_all("src").with_context(|| "Failed to create src directory")?;

    let config = Config::new(project_name);
    config.save(CONFIG_FILE)?;

    // Keep an existing program
    let main_path = Path::new(MAIN_PROGRAM_PATH);
    if !main_path.exists() {
        fs::write(main_path, MAIN_PROGRAM_TEMPLATE)
            .with_context(|| format!("Failed to create {MAIN_PROGRAM_PATH}"))?;
    }

    print_status("Created", &format!("blockgen project '{project_name}'"));
    println!();
    println!("To get started:");
    println!("  blockgen build");

    Ok(())
}
