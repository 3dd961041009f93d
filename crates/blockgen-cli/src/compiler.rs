//! Project build driver.
//!
//! Pipeline: program description → block graph → generator → source file

use crate::pipeline;
use crate::utils::{MAIN_PROGRAM_PATH, print_project_status};
use anyhow::{Context, Result};
use blockgen_core::Target;
use blockgen_utils::Config;
use blockgen_utils::config::CONFIG_FILE;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Generates code for a blockgen project.
pub struct Compiler {
    project_root: PathBuf,
    config: Config,
}

impl Compiler {
    /// Creates a compiler for the given project.
    ///
    /// # Errors
    /// Returns an error if the project configuration cannot be loaded.
    pub fn new(project_root: PathBuf) -> Result<Self> {
        let config = Config::load(project_root.join(CONFIG_FILE))?;
        Ok(Self {
            project_root,
            config,
        })
    }

    /// Generates the project's program and writes it to `target/`.
    /// `target` overrides the language configured in blockgen.toml.
    ///
    /// # Errors
    /// Returns an error if generation fails at any stage.
    pub fn build(&self, target: Option<Target>) -> Result<(PathBuf, Duration)> {
        let start = Instant::now();
        let target = target.unwrap_or(self.config.generator.target);

        print_project_status("Generating", &self.config, &self.project_root);

        let code = pipeline::build_pipeline(
            &self.source_path(),
            target,
            &pipeline::options(&self.config),
        )?;
        let output_path = self.save_generated_code(&code, target)?;

        let duration = start.elapsed();
        println!(
            "{:>12} {target} code written to {} in {:.2}s",
            "Finished".green().bold(),
            output_path.display(),
            duration.as_secs_f64()
        );

        Ok((output_path, duration))
    }

    /// Checks that the project generates without writing anything.
    ///
    /// # Errors
    /// Returns an error if the project contains errors.
    pub fn check(&self) -> Result<Duration> {
        let start = Instant::now();
        let target = self.config.generator.target;

        print_project_status("Checking", &self.config, &self.project_root);

        pipeline::check_pipeline(&self.source_path(), target, &pipeline::options(&self.config))?;

        let duration = start.elapsed();
        println!(
            "{:>12} project checked successfully in {:.2}s",
            "Finished".green().bold(),
            duration.as_secs_f64()
        );

        Ok(duration)
    }

    fn source_path(&self) -> PathBuf {
        self.project_root.join(MAIN_PROGRAM_PATH)
    }

    /// Writes generated code to `target/main.<ext>`.
    fn save_generated_code(&self, code: &str, target: Target) -> Result<PathBuf> {
        let target_dir = self.project_root.join("target");
        fs::create_dir_all(&target_dir).with_context(|| "Failed to create target directory")?;

        let output_path = target_dir.join(format!("main.{}", target.extension()));
        fs::write(&output_path, code)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        Ok(output_path)
    }
}
