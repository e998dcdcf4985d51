use edmgen_codegen::{diagnostic::Severity, plan::ModelMapping};
use edmgen_core::TypeKind;
use edmgen_manifest::ModelToml;

use crate::reports::CheckReport;

/// Map the model and summarize the outcome.
pub fn check(model_toml: &ModelToml) -> CheckReport {
    let model = model_toml.model();
    let mapping = ModelMapping::build(model);

    let count = |kind: TypeKind| model.types.iter().filter(|t| t.kind == kind).count();

    let mut report = CheckReport {
        model_path: model_toml.path().to_path_buf(),
        namespace: model.namespace.clone(),
        type_counts: (
            count(TypeKind::Entity),
            count(TypeKind::Complex),
            count(TypeKind::Enum),
        ),
        properties: model.properties().count(),
        renamed: mapping.rename_count(),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
    };

    for diag in &mapping.diagnostics {
        let message = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Error => report.errors.push(message),
            Severity::Warning => report.warnings.push(message),
            Severity::Info => report.infos.push(message),
        }
    }

    report
}
