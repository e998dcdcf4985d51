//! Manifest types and parsing for model.toml files.

mod file;
mod parse;

pub use file::ModelToml;
use indexmap::IndexMap;
use serde::Deserialize;

use edmgen_core::TypeKind;

/// Root manifest for model.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Model metadata
    pub model: ModelConfig,

    /// Declared types, in file order
    #[serde(default)]
    pub types: IndexMap<String, TypeSpec>,
}

/// The `[model]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Schema namespace every declared type lives in (e.g. "microsoft.graph")
    pub namespace: String,
}

/// A `[types.<name>]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSpec {
    pub kind: TypeKind,

    /// Bitmask semantics, enums only
    #[serde(default)]
    pub flags: bool,

    /// Property name -> type reference, in file order
    #[serde(default)]
    pub properties: IndexMap<String, PropertySpec>,
}

/// A property entry: either a bare type reference or a table with a
/// projection overriding the declared type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PropertySpec {
    Type(String),
    Detailed {
        #[serde(rename = "type")]
        ty: String,
        #[serde(default)]
        projection: Option<String>,
    },
}

impl PropertySpec {
    /// The declared type reference.
    pub fn type_ref(&self) -> &str {
        match self {
            PropertySpec::Type(ty) | PropertySpec::Detailed { ty, .. } => ty,
        }
    }

    /// The projection type reference, if any.
    pub fn projection_ref(&self) -> Option<&str> {
        match self {
            PropertySpec::Type(_) => None,
            PropertySpec::Detailed { projection, .. } => projection.as_deref(),
        }
    }
}

impl Manifest {
    /// Check if a type is declared
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Total number of declared properties
    pub fn property_count(&self) -> usize {
        self.types.values().map(|t| t.properties.len()).sum()
    }
}
