//! Configuration file handling for blockgen projects.

use anyhow::{Context, Result};
use blockgen_core::Target;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "blockgen.toml";

/// Represents the blockgen.toml configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub package: Package,
    #[serde(default)]
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
}

/// Settings passed to the code generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSection {
    #[serde(default)]
    pub target: Target,
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Text injected at the top of every loop body; `%1` is replaced by the
    /// quoted block id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_trap: Option<String>,
}

fn default_indent() -> String {
    "  ".to_string()
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            target: Target::default(),
            indent: default_indent(),
            loop_trap: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration with the given project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            package: Package {
                name: name.into(),
                version: "0.1.0".to_string(),
            },
            generator: GeneratorSection::default(),
        }
    }

    /// Loads configuration from a blockgen.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Saves configuration to a blockgen.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds blockgen.toml starting from the current directory and walking
    /// up. Returns the configuration and the directory that contains it.
    ///
    /// # Errors
    /// Returns an error if no blockgen.toml is found in the current or parent
    /// directories.
    pub fn find() -> Result<(Self, PathBuf)> {
        let current_dir =
            std::env::current_dir().with_context(|| "Failed to get current directory")?;
        Self::find_from(current_dir)
    }

    /// Like [`find`](Self::find), starting from `start`.
    ///
    /// # Errors
    /// Returns an error if no blockgen.toml is found in `start` or any parent.
    pub fn find_from(start: impl Into<PathBuf>) -> Result<(Self, PathBuf)> {
        let mut current_dir = start.into();
        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok((config, current_dir));
            }

            if !current_dir.pop() {
                anyhow::bail!(
                    "Could not find {CONFIG_FILE} in current directory or any parent directory"
                );
            }
        }
    }
}
