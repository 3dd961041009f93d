//! Implementation of the `blockgen generate` command.

use crate::pipeline;
use crate::utils::print_status;
use anyhow::{Context, Result};
use blockgen_codegen::GeneratorOptions;
use blockgen_core::Target;
use std::fs;
use std::path::Path;

/// Executes the `generate` command for a single program description,
/// outside of any project. Without `output` the code goes to stdout.
///
/// # Errors
/// Returns an error if the program cannot be loaded, generated or written.
pub fn execute(input: &Path, target: Target, output: Option<&Path>) -> Result<()> {
    let code = pipeline::build_pipeline(input, target, &GeneratorOptions::default())?;

    match output {
        Some(path) => {
            fs::write(path, &code)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            print_status("Generated", &format!("{target} code in {}", path.display()));
        }
        None => print!("{code}"),
    }

    Ok(())
}
