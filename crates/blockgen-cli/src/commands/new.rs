//! Implementation of the `blockgen new` command.

use crate::utils::{MAIN_PROGRAM_PATH, MAIN_PROGRAM_TEMPLATE, print_status};
use anyhow::{Context, Result};
use blockgen_utils::Config;
use blockgen_utils::config::CONFIG_FILE;
use std::fs;
use std::path::Path;

/// Executes the `new` command to create a new project.
///
/// # Errors
/// Returns an error if the project directory already exists or if files
/// cannot be created.
pub fn execute(name: &str) -> Result<()> {
    let project_dir = Path::new(name);

    if project_dir.exists() {
        anyhow::bail!("Directory '{name}' already exists");
    }

    create_project_structure(project_dir, name)?;

    print_status("Created", &format!("blockgen project '{name}'"));
    println!();
    println!("To get started:");
    println!("  cd {name}");
    println!("  blockgen build");

    Ok(())
}

/// Creates the project directory structure.
fn create_project_structure(project_dir: &Path, name: &str) -> Result<()> {
    fs::create_dir_all(project_dir.join("src"))
        .with_context(|| format!("Failed to create directory '{name}'"))?;

    let config = Config::new(name);
    config.save(project_dir.join(CONFIG_FILE))?;

    fs::write(project_dir.join(MAIN_PROGRAM_PATH), MAIN_PROGRAM_TEMPLATE)
        .with_context(|| format!("Failed to create {MAIN_PROGRAM_PATH}"))?;

    Ok(())
}
