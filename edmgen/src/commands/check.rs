use std::path::PathBuf;

use clap::Args;
use edmgen_manifest::ModelToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to model.toml (defaults to ./model.toml)
    #[arg(short, long, default_value = "model.toml")]
    pub model: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let model_toml = ModelToml::open(&self.model).unwrap_or_exit();

        let report = ops::check(&model_toml);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
