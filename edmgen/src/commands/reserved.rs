use clap::Args;
use edmgen_codegen::language::JAVA_RESERVED;
use eyre::Result;

use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct ReservedCommand {
    /// Print one word per line without the header
    #[arg(long)]
    pub plain: bool,
}

impl ReservedCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();
        if !self.plain {
            out.key_value("Rename prefix", JAVA_RESERVED.rename_prefix());
            out.newline();
            out.section(&format!("Reserved words ({})", JAVA_RESERVED.len()));
        }

        let mut words: Vec<&str> = JAVA_RESERVED.iter().collect();
        words.sort_unstable();
        for word in words {
            if self.plain {
                out.preformatted(word);
            } else {
                out.list_item(word);
            }
        }
        Ok(())
    }
}
