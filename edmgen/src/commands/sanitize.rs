use clap::Args;
use edmgen_codegen::naming::{OwnerContext, Sanitizer};
use eyre::{Result, bail};

use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct SanitizeCommand {
    /// Identifier to sanitize
    pub name: String,

    /// Name of the declaring class
    #[arg(long, requires = "property_type")]
    pub owner: Option<String>,

    /// Type name of the property (with --owner)
    #[arg(long = "property-type")]
    pub property_type: Option<String>,
}

impl SanitizeCommand {
    pub fn run(&self) -> Result<()> {
        let owner = match (&self.owner, &self.property_type) {
            (Some(owner), Some(ty)) => Some(OwnerContext::new(owner, ty)),
            (None, None) => None,
            _ => bail!("--owner and --property-type must be given together"),
        };

        let sanitized = Sanitizer::java().sanitize(&self.name, owner.as_ref());

        let mut out = TerminalOutput::new();
        out.preformatted(&sanitized.name);
        for event in &sanitized.events {
            out.info(&event.to_string());
        }
        Ok(())
    }
}
