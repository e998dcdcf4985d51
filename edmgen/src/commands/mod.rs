mod check;
mod completions;
mod map;
mod reserved;
mod sanitize;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use map::MapCommand;
use reserved::ReservedCommand;
use sanitize::SanitizeCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for edmgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "edmgen")]
#[command(version)]
#[command(about = "Inspect Java type and identifier mappings for EDM models")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Map(cmd) => cmd.run(),
            Commands::Sanitize(cmd) => cmd.run(),
            Commands::Reserved(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate model.toml and summarize the mapping
    Check(CheckCommand),

    /// Print the type and identifier mapping of every declared type
    Map(MapCommand),

    /// Sanitize a single identifier
    Sanitize(SanitizeCommand),

    /// Print the reserved words and the rename prefix
    Reserved(ReservedCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
