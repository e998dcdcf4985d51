//! Manifest parsing and type reference resolution.

use std::{path::Path, str::FromStr};

use edmgen_core::{Model, PropertyDescriptor, TypeDefinition, TypeDescriptor, TypeKind};

use super::Manifest;
use crate::{Error, Result, SourceContext};

/// Namespace of the built-in primitive types.
const EDM_NAMESPACE: &str = "Edm";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "model.toml").map(|(manifest, _)| manifest)
    }
}

impl Manifest {
    /// Parse a model.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a model.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename).map(|(manifest, _)| manifest)
    }

    /// Resolve the manifest into a model, reporting errors against `ctx`.
    pub fn resolve(&self, ctx: &SourceContext) -> Result<Model> {
        validate_manifest(self, ctx)?;

        let namespace = &self.model.namespace;
        let types = self
            .types
            .iter()
            .map(|(name, spec)| -> Result<TypeDefinition> {
                let properties = spec
                    .properties
                    .iter()
                    .map(|(prop_name, prop)| -> Result<PropertyDescriptor> {
                        let declared = self.resolve_reference(prop.type_ref(), prop_name, ctx)?;
                        let mut descriptor = PropertyDescriptor::new(prop_name, name, declared);
                        if let Some(projection) = prop.projection_ref() {
                            descriptor = descriptor
                                .with_projection(self.resolve_reference(projection, prop_name, ctx)?);
                        }
                        Ok(descriptor)
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(TypeDefinition {
                    name: name.clone(),
                    namespace: namespace.clone(),
                    kind: spec.kind,
                    flags: spec.flags,
                    properties,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Model {
            namespace: namespace.clone(),
            types,
        })
    }

    /// Resolve `Edm.<Primitive>` or `<namespace>.<declaredType>`.
    fn resolve_reference(
        &self,
        reference: &str,
        property: &str,
        ctx: &SourceContext,
    ) -> Result<TypeDescriptor> {
        let unknown = || ctx.unknown_type_error(reference, property);
        let (namespace, name) = reference.rsplit_once('.').ok_or_else(unknown)?;

        if namespace == EDM_NAMESPACE && !name.is_empty() {
            return Ok(TypeDescriptor::primitive(name));
        }
        if namespace != self.model.namespace {
            return Err(unknown());
        }

        let spec = self.types.get(name).ok_or_else(unknown)?;
        let descriptor = match spec.kind {
            TypeKind::Enum => TypeDescriptor::enumeration(name, spec.flags),
            TypeKind::Entity | TypeKind::Complex => TypeDescriptor::domain(name),
        };
        Ok(descriptor.in_namespace(namespace))
    }
}

/// Parse a manifest and resolve its model.
pub(crate) fn parse_manifest(content: &str, filename: &str) -> Result<(Manifest, Model)> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    let model = manifest.resolve(&ctx)?;
    Ok((manifest, model))
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let namespace = &manifest.model.namespace;
    if namespace.is_empty() {
        return Err(ctx.validation_error("model namespace must not be empty", "namespace"));
    }
    if namespace == EDM_NAMESPACE {
        return Err(ctx.validation_error("the Edm namespace is reserved for primitives", namespace));
    }
    if namespace.split('.').any(|segment| !is_name(segment)) {
        return Err(ctx.validation_error(
            format!("invalid namespace '{}'", namespace),
            namespace,
        ));
    }

    for (name, spec) in &manifest.types {
        if !is_name(name) {
            return Err(ctx.validation_error(format!("invalid type name '{}'", name), name));
        }
        if spec.flags && spec.kind != TypeKind::Enum {
            return Err(ctx.flags_on_non_enum_error(name));
        }
        if spec.kind == TypeKind::Enum && !spec.properties.is_empty() {
            return Err(ctx.validation_error(
                format!("enum '{}' cannot declare properties", name),
                &format!("types.{}.properties", name),
            ));
        }
    }
    Ok(())
}

/// A non-empty name without dots or whitespace.
fn is_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c == '.' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use edmgen_core::NamespaceKind;

    use super::*;

    const GRAPH: &str = r#"
        [model]
        namespace = "microsoft.graph"

        [types.directoryObject]
        kind = "entity"

        [types.directoryObject.properties]
        id = "Edm.String"

        [types.user]
        kind = "entity"

        [types.user.properties]
        id = "Edm.String"
        manager = "microsoft.graph.directoryObject"
        favoriteColors = "microsoft.graph.color"
        photo = { type = "Edm.Binary", projection = "microsoft.graph.profilePhoto" }
        "odata@type" = "Edm.String"

        [types.color]
        kind = "enum"
        flags = true

        [types.profilePhoto]
        kind = "complex"
    "#;

    fn parse(src: &str) -> Result<(Manifest, Model)> {
        parse_manifest(src, "model.toml")
    }

    #[test]
    fn test_parse_graph_model() {
        let (manifest, model) = parse(GRAPH).unwrap();
        assert_eq!(manifest.types.len(), 4);
        assert_eq!(manifest.property_count(), 6);
        assert!(manifest.has_type("color"));

        assert_eq!(model.namespace, "microsoft.graph");
        let names: Vec<&str> = model.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["directoryObject", "user", "color", "profilePhoto"]);
    }

    #[test]
    fn test_property_references_resolve() {
        let (_, model) = parse(GRAPH).unwrap();
        let user = model.find_type("user").unwrap();

        let id = &user.properties[0];
        assert_eq!(id.declared_type.namespace_kind, NamespaceKind::Primitive);
        assert_eq!(id.declaring_type_name, "user");

        let manager = &user.properties[1];
        assert_eq!(manager.declared_type.qualified_name(), "microsoft.graph.directoryObject");
        assert!(!manager.declared_type.is_enum);

        let colors = &user.properties[2];
        assert!(colors.declared_type.is_flags());

        let photo = &user.properties[3];
        assert_eq!(photo.declared_type.name, "Binary");
        assert_eq!(photo.projected_type().name, "profilePhoto");

        assert_eq!(user.properties[4].name, "odata@type");
    }

    #[test]
    fn test_demo_model_parses() {
        let (manifest, model) = parse(include_str!("../../../demos/model.toml")).unwrap();
        assert_eq!(manifest.types.len(), 4);
        let user = model.find_type("user").unwrap();
        assert_eq!(user.properties.len(), 9);
        assert!(user.properties[5].declared_type.is_flags());
    }

    #[test]
    fn test_from_str() {
        let manifest: Manifest = GRAPH.parse().unwrap();
        assert_eq!(manifest.model.namespace, "microsoft.graph");
    }

    #[test]
    fn test_unknown_type_reference() {
        let src = r#"
            [model]
            namespace = "microsoft.graph"

            [types.user]
            kind = "entity"
            properties = { manager = "microsoft.graph.nobody" }
        "#;
        let err = parse(src).unwrap_err();
        match *err {
            Error::UnknownType {
                reference,
                property,
                span,
                ..
            } => {
                assert_eq!(reference, "microsoft.graph.nobody");
                assert_eq!(property, "manager");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_foreign_namespace_is_unknown() {
        let src = r#"
            [model]
            namespace = "microsoft.graph"

            [types.user]
            kind = "entity"
            properties = { manager = "other.user" }
        "#;
        assert!(matches!(*parse(src).unwrap_err(), Error::UnknownType { .. }));
    }

    #[test]
    fn test_unqualified_reference_is_unknown() {
        let src = r#"
            [model]
            namespace = "microsoft.graph"

            [types.user]
            kind = "entity"
            properties = { manager = "user" }
        "#;
        assert!(matches!(*parse(src).unwrap_err(), Error::UnknownType { .. }));
    }

    #[test]
    fn test_flags_on_entity() {
        let src = r#"
            [model]
            namespace = "microsoft.graph"

            [types.user]
            kind = "entity"
            flags = true
        "#;
        match *parse(src).unwrap_err() {
            Error::FlagsOnNonEnum { type_name, .. } => assert_eq!(type_name, "user"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_enum_with_properties() {
        let src = r#"
            [model]
            namespace = "microsoft.graph"

            [types.color]
            kind = "enum"
            properties = { red = "Edm.Int32" }
        "#;
        assert!(matches!(*parse(src).unwrap_err(), Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_namespace() {
        let src = r#"
            [model]
            namespace = "microsoft..graph"
        "#;
        assert!(matches!(*parse(src).unwrap_err(), Error::Validation { .. }));

        let src = r#"
            [model]
            namespace = "Edm"
        "#;
        assert!(matches!(*parse(src).unwrap_err(), Error::Validation { .. }));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let src = r#"
            [model]
            namespace = "microsoft.graph"

            [types.user]
            kind = "interface"
        "#;
        assert!(matches!(*parse(src).unwrap_err(), Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_type_is_parse_error() {
        let src = r#"
            [model]
            namespace = "microsoft.graph"

            [types.user]
            kind = "entity"

            [types.user]
            kind = "complex"
        "#;
        let first = src.find("[types.user]").unwrap();
        match *parse(src).unwrap_err() {
            Error::Parse { span, .. } => {
                let span = span.expect("duplicate table should be located");
                assert!(span.offset() > first);
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_model_table() {
        assert!(matches!(*parse("").unwrap_err(), Error::Parse { .. }));
    }
}
