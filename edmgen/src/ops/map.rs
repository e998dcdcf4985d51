use edmgen_codegen::plan::ModelMapping;

use crate::reports::{ClassSection, MapReport};

/// Turn a mapping plan into a printable report.
pub fn map(mapping: &ModelMapping) -> MapReport {
    let classes = mapping
        .classes
        .iter()
        .map(|class| ClassSection {
            heading: class.heading(),
            imports: class.imports.clone(),
            members: class.members.iter().map(|m| m.summary()).collect(),
        })
        .collect();

    MapReport {
        language: mapping.language.to_string(),
        classes,
        notes: mapping.diagnostics.iter().map(|d| d.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use edmgen_core::{Model, PropertyDescriptor, TypeDefinition, TypeDescriptor, TypeKind};

    use super::*;
    use crate::reports::{RecordingOutput, Report};

    #[test]
    fn test_map_report() {
        let model = Model {
            namespace: "contoso".to_string(),
            types: vec![TypeDefinition {
                name: "item".to_string(),
                namespace: "contoso".to_string(),
                kind: TypeKind::Entity,
                flags: false,
                properties: vec![
                    PropertyDescriptor::new("size", "item", TypeDescriptor::primitive("Int64")),
                    PropertyDescriptor::new("default", "item", TypeDescriptor::primitive("Boolean")),
                ],
            }],
        };

        let report = map(&ModelMapping::build(&model));
        assert_eq!(report.classes.len(), 1);
        assert_eq!(report.classes[0].heading, "Item (entity)");
        assert_eq!(
            report.classes[0].members,
            vec!["size: Long", "msgraphdefault: Boolean (was default)"]
        );

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines[0], "# Mapping (java)");
        assert_eq!(out.lines[2], "Item (entity):");
        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("info: 'default' is a reserved word in Java, renamed to 'msgraphdefault' (at item.default)")
        );
    }
}
