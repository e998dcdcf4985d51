//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the model file.
    pub model_path: PathBuf,
    /// Schema namespace.
    pub namespace: String,
    /// Number of declared types per kind: entity, complex, enum.
    pub type_counts: (usize, usize, usize),
    /// Total declared properties.
    pub properties: usize,
    /// Identifiers changed by sanitizing.
    pub renamed: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.preformatted(&format!("error: {}", error));
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.info(info);
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.model_path.display()));
        out.newline();

        let (entities, complex, enums) = self.type_counts;
        out.key_value("Namespace", &self.namespace);
        out.key_value(
            "Types",
            &format!(
                "{} ({} entity, {} complex, {} enum)",
                entities + complex + enums,
                entities,
                complex,
                enums
            ),
        );
        out.key_value("Properties", &self.properties.to_string());
        out.key_value("Renamed", &self.renamed.to_string());
    }
}
