use std::path::PathBuf;

use clap::Args;
use edmgen_codegen::plan::ModelMapping;
use edmgen_manifest::ModelToml;
use eyre::{Context, Result, bail};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct MapCommand {
    /// Path to model.toml (defaults to ./model.toml)
    #[arg(short, long, default_value = "model.toml")]
    pub model: PathBuf,

    /// Only show the mapping of this type
    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,

    /// Print the mapping as JSON
    #[arg(long)]
    pub json: bool,
}

impl MapCommand {
    /// Run the map command
    pub fn run(&self) -> Result<()> {
        let model_toml = ModelToml::open(&self.model).unwrap_or_exit();
        let mut mapping = ModelMapping::build(model_toml.model());

        if let Some(name) = &self.type_name {
            if mapping.class(name).is_none() {
                bail!("type '{}' is not declared in {}", name, self.model.display());
            }
            mapping.classes.retain(|c| &c.schema_name == name);
        }

        if self.json {
            let json =
                serde_json::to_string_pretty(&mapping).wrap_err("Failed to serialize mapping")?;
            println!("{}", json);
            return Ok(());
        }

        ops::map(&mapping).render(&mut TerminalOutput::new());
        Ok(())
    }
}
