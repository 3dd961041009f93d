//! Command-line interface for the blockgen code generator.

mod commands;
mod compiler;
mod pipeline;
mod utils;

use anyhow::Result;
use blockgen_core::Target;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blockgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new blockgen project
    #[command(visible_alias = "n")]
    New {
        /// Name of the project to create
        name: String,
    },

    /// Initialize a blockgen project in an existing directory
    Init,

    /// Generate code for the current project
    #[command(visible_alias = "b")]
    Build {
        /// Override the target language from blockgen.toml
        #[arg(short, long)]
        target: Option<Target>,
    },

    /// Check the current project for errors
    Check,

    /// Remove the target directory
    Clean,

    /// Generate code for a single program description
    #[command(visible_alias = "g")]
    Generate {
        /// Path to the program description
        input: PathBuf,

        /// Target language
        #[arg(short, long, default_value = "python")]
        target: Target,

        /// Write the output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logging is off unless BLOCKGEN_LOG is set, e.g. BLOCKGEN_LOG=blockgen_codegen=debug
    if let Ok(filter) = EnvFilter::try_from_env("BLOCKGEN_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("tracing initialized");
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::New { name } => commands::new::execute(&name),
        Commands::Init => commands::init::execute(),
        Commands::Build { target } => commands::build::execute(target),
        Commands::Check => commands::check::execute(),
        Commands::Clean => commands::clean::execute(),
        Commands::Generate {
            input,
            target,
            output,
        } => commands::generate::execute(&input, target, output.as_deref()),
    }
}
