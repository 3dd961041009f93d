//! Implementation of the `blockgen check` command.

use crate::compiler::Compiler;
use crate::utils::find_project;
use anyhow::Result;

/// Executes the `check` command to validate the project without writing
/// any output.
///
/// # Errors
/// Returns an error if the project cannot be validated.
pub fn execute() -> Result<()> {
    let (_config, project_root) = find_project()?;

    let compiler = Compiler::new(project_root)?;
    let _ = compiler.check()?;

    Ok(())
}
