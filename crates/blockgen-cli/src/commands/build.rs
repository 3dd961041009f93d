//! Implementation of the `blockgen build` command.

use crate::compiler::Compiler;
use crate::utils::find_project;
use anyhow::Result;
use blockgen_core::Target;

/// Executes the `build` command to generate code for the project.
///
/// # Errors
/// Returns an error if the project cannot be built.
pub fn execute(target: Option<Target>) -> Result<()> {
    let (_config, project_root) = find_project()?;
    let compiler = Compiler::new(project_root)?;
    compiler.build(target)?;
    Ok(())
}
