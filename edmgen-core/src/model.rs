//! Read-only descriptors of a parsed EDM model.
//!
//! These are views handed over by the schema loader; nothing here owns
//! generation state, and all of it is rebuilt per model.

use serde::{Deserialize, Serialize};

use crate::utils::upper_first;

/// Which namespace a type lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceKind {
    /// Built-in `Edm` primitive.
    Primitive,
    /// Type declared by the service schema (entity, complex or enum).
    Domain,
}

/// Abstract description of a schema type.
///
/// `is_flags_enum` implies `is_enum`; the constructors uphold this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub namespace_kind: NamespaceKind,
    pub is_enum: bool,
    pub is_flags_enum: bool,
    /// Declaring namespace, used to build the fully-qualified name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl TypeDescriptor {
    /// An `Edm` primitive, e.g. `Int32` or `String`.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace_kind: NamespaceKind::Primitive,
            is_enum: false,
            is_flags_enum: false,
            namespace: None,
        }
    }

    /// A non-enum domain type (entity or complex).
    pub fn domain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace_kind: NamespaceKind::Domain,
            is_enum: false,
            is_flags_enum: false,
            namespace: None,
        }
    }

    /// A domain enumeration, optionally with flag (bitmask) semantics.
    pub fn enumeration(name: impl Into<String>, is_flags: bool) -> Self {
        Self {
            name: name.into(),
            namespace_kind: NamespaceKind::Domain,
            is_enum: true,
            is_flags_enum: is_flags,
            namespace: None,
        }
    }

    /// Attach a declaring namespace.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Returns true for built-in `Edm` types.
    pub fn is_primitive(&self) -> bool {
        self.namespace_kind == NamespaceKind::Primitive
    }

    /// Returns true if values of this type combine as a bitmask.
    pub fn is_flags(&self) -> bool {
        self.is_enum && self.is_flags_enum
    }

    /// Fully-qualified dotted name: `namespace.name`, or `name` as given when
    /// no namespace is attached.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name),
            _ => self.name.clone(),
        }
    }
}

/// A named member of a structured type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub declaring_type_name: String,
    /// The type as declared in the schema.
    pub declared_type: TypeDescriptor,
    /// Override used in generated code instead of `declared_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<TypeDescriptor>,
}

impl PropertyDescriptor {
    pub fn new(
        name: impl Into<String>,
        declaring_type_name: impl Into<String>,
        declared_type: TypeDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            declaring_type_name: declaring_type_name.into(),
            declared_type,
            projection: None,
        }
    }

    /// Override the emitted type.
    pub fn with_projection(mut self, projection: TypeDescriptor) -> Self {
        self.projection = Some(projection);
        self
    }

    /// The type actually emitted for this property.
    pub fn projected_type(&self) -> &TypeDescriptor {
        self.projection.as_ref().unwrap_or(&self.declared_type)
    }
}

/// A named function/action parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Kind of a declared schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Entity,
    Complex,
    Enum,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Entity => "entity",
            TypeKind::Complex => "complex",
            TypeKind::Enum => "enum",
        }
    }
}

/// A type declared by the schema, together with its properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub name: String,
    pub namespace: String,
    pub kind: TypeKind,
    /// Only meaningful for enums.
    #[serde(default)]
    pub flags: bool,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl TypeDefinition {
    /// The descriptor other types use to reference this one.
    pub fn descriptor(&self) -> TypeDescriptor {
        let descriptor = match self.kind {
            TypeKind::Enum => TypeDescriptor::enumeration(&self.name, self.flags),
            TypeKind::Entity | TypeKind::Complex => TypeDescriptor::domain(&self.name),
        };
        descriptor.in_namespace(&self.namespace)
    }

    /// Name of the generated class (first character uppercased).
    pub fn class_name(&self) -> String {
        upper_first(&self.name)
    }
}

/// A loaded schema model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub namespace: String,
    pub types: Vec<TypeDefinition>,
}

impl Model {
    /// Find a declared type by its unqualified name.
    pub fn find_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Iterate over every property of every declared type.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.types.iter().flat_map(|t| t.properties.iter())
    }
}
