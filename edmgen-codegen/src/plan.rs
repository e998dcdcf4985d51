//! Whole-model mapping plan.
//!
//! Applies the type mapper, the sanitizer and import collection to every
//! declared type, producing what a renderer needs for each class.

use std::fmt;

use edmgen_core::{Model, PropertyDescriptor, TypeDefinition, TypeKind};
use serde::Serialize;

use crate::{
    diagnostic::{Diagnostic, Diagnostics},
    generation::ImportCollector,
    language::TypeMapper,
    mappers::JavaTypeMapper,
    naming::{RenameEvent, Sanitizer},
};

/// Mapping of one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberMapping {
    /// Property name as declared in the model.
    pub property: String,
    /// Sanitized identifier to emit.
    pub identifier: String,
    /// Resolved type string.
    pub type_name: String,
    pub simple: bool,
    /// Lowercased import path of a qualified domain type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_path: Option<String>,
}

/// Mapping of one declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMapping {
    pub schema_name: String,
    pub class_name: String,
    pub kind: TypeKind,
    /// Type string used when other types reference this one.
    pub reference_type: String,
    pub imports: Vec<String>,
    pub members: Vec<MemberMapping>,
}

/// Mapping of a whole model plus the diagnostics produced along the way.
#[derive(Debug, Clone, Serialize)]
pub struct ModelMapping {
    pub language: &'static str,
    pub classes: Vec<ClassMapping>,
    pub diagnostics: Diagnostics,
}

impl ModelMapping {
    /// Map a model to Java.
    pub fn build(model: &Model) -> Self {
        Self::build_with(model, &JavaTypeMapper, Sanitizer::java())
    }

    /// Map a model with a specific type mapper and sanitizer.
    pub fn build_with(model: &Model, mapper: &impl TypeMapper, sanitizer: Sanitizer<'_>) -> Self {
        let mut diagnostics = Diagnostics::new();
        let classes = model
            .types
            .iter()
            .map(|def| map_class(def, mapper, sanitizer, &mut diagnostics))
            .collect();

        Self {
            language: mapper.language(),
            classes,
            diagnostics,
        }
    }

    /// Find a class mapping by its schema name.
    pub fn class(&self, schema_name: &str) -> Option<&ClassMapping> {
        self.classes.iter().find(|c| c.schema_name == schema_name)
    }

    /// Number of identifiers that were renamed.
    pub fn rename_count(&self) -> usize {
        self.classes
            .iter()
            .flat_map(|c| c.members.iter())
            .filter(|m| m.identifier != m.property)
            .count()
    }
}

fn map_class(
    def: &TypeDefinition,
    mapper: &impl TypeMapper,
    sanitizer: Sanitizer<'_>,
    diagnostics: &mut Diagnostics,
) -> ClassMapping {
    let mut imports = ImportCollector::new();
    let members = def
        .properties
        .iter()
        .map(|prop| map_member(def, prop, mapper, sanitizer, &mut imports, diagnostics))
        .collect();

    ClassMapping {
        schema_name: def.name.clone(),
        class_name: def.class_name(),
        kind: def.kind,
        reference_type: mapper.resolve_type_name(&def.descriptor()),
        imports: imports.lines(),
        members,
    }
}

fn map_member(
    def: &TypeDefinition,
    prop: &PropertyDescriptor,
    mapper: &impl TypeMapper,
    sanitizer: Sanitizer<'_>,
    imports: &mut ImportCollector,
    diagnostics: &mut Diagnostics,
) -> MemberMapping {
    let location = format!("{}.{}", def.name, prop.name);

    let mut events: Vec<RenameEvent> = Vec::new();
    let identifier = sanitizer.sanitize_property(prop, &mut events);
    for event in events {
        diagnostics.push(Diagnostic::from(event).at(&location));
    }
    if identifier.is_empty() {
        diagnostics.push(
            Diagnostic::warning("sanitize", "identifier is empty after sanitizing").at(&location),
        );
    }

    let import_path = match imports.add_property(prop) {
        Ok(path) => path,
        Err(err) => {
            diagnostics.push(Diagnostic::error("imports", err.to_string()).at(&location));
            None
        }
    };

    MemberMapping {
        property: prop.name.clone(),
        identifier,
        type_name: mapper.resolve_property_type(prop),
        simple: mapper.is_simple_property(prop),
        import_path,
    }
}

impl fmt::Display for ModelMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", class)?;
        }

        if !self.diagnostics.is_empty() {
            writeln!(f)?;
            for diag in &self.diagnostics {
                writeln!(f, "{}", diag)?;
            }
        }
        Ok(())
    }
}

impl ClassMapping {
    /// One-line summary, e.g. `Color (enum) as EnumSet<Color>`.
    pub fn heading(&self) -> String {
        let mut heading = format!("{} ({})", self.class_name, self.kind.as_str());
        if self.reference_type != self.class_name {
            heading.push_str(" as ");
            heading.push_str(&self.reference_type);
        }
        heading
    }
}

impl MemberMapping {
    /// One-line summary, e.g. `msgraphclass: Integer [simple] (was class)`.
    pub fn summary(&self) -> String {
        let mut summary = format!("{}: {}", self.identifier, self.type_name);
        if self.simple {
            summary.push_str(" [simple]");
        }
        if self.identifier != self.property {
            summary.push_str(&format!(" (was {})", self.property));
        }
        summary
    }
}

impl fmt::Display for ClassMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        for import in &self.imports {
            writeln!(f, "  {}", import)?;
        }
        for member in &self.members {
            writeln!(f, "  {}", member.summary())?;
        }
        Ok(())
    }
}
