//! Java type mapper implementation.

use edmgen_core::EdmPrimitive;

use crate::language::{JAVA_RESERVED, ReservedWords, TypeMapper};

/// Package holding the SDK's own model helper types.
pub const MODEL_NAMESPACE: &str = "com.microsoft.graph.models.extensions";

/// Date-only calendar type shipped with the SDK.
pub const DATE_ONLY: &str = "com.microsoft.graph.models.extensions.DateOnly";

/// Time-of-day type shipped with the SDK.
pub const TIME_OF_DAY: &str = "com.microsoft.graph.models.extensions.TimeOfDay";

/// Resolved type strings treated as simple scalars.
///
/// Must agree with [`JavaTypeMapper::is_simple_primitive`] for every mapped
/// primitive.
pub const SIMPLE_TYPE_NAMES: [&str; 9] = [
    "Integer",
    "java.util.UUID",
    "java.util.Calendar",
    "byte[]",
    "String",
    "long",
    "Byte[]",
    "Short",
    DATE_ONLY,
];

/// Java type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl JavaTypeMapper {
    pub fn new() -> Self {
        Self
    }

    /// Java type string for a mapped primitive.
    pub fn java_type(primitive: EdmPrimitive) -> &'static str {
        match primitive {
            EdmPrimitive::Int16 | EdmPrimitive::Int32 => "Integer",
            EdmPrimitive::Int64 => "Long",
            EdmPrimitive::Guid => "java.util.UUID",
            EdmPrimitive::DateTimeOffset => "java.util.Calendar",
            EdmPrimitive::Date => DATE_ONLY,
            EdmPrimitive::TimeOfDay => TIME_OF_DAY,
            EdmPrimitive::Duration => "javax.xml.datatype.Duration",
            EdmPrimitive::Json => "com.google.gson.JsonElement",
            EdmPrimitive::Binary => "byte[]",
            EdmPrimitive::Single => "float",
        }
    }

    /// Simple/complex classification of a mapped primitive.
    ///
    /// Adding a primitive forces a decision here as well as in
    /// [`java_type`](Self::java_type).
    pub fn is_simple_primitive(primitive: EdmPrimitive) -> bool {
        match primitive {
            EdmPrimitive::Int16
            | EdmPrimitive::Int32
            | EdmPrimitive::Guid
            | EdmPrimitive::DateTimeOffset
            | EdmPrimitive::Date
            | EdmPrimitive::Binary => true,
            EdmPrimitive::Int64
            | EdmPrimitive::TimeOfDay
            | EdmPrimitive::Duration
            | EdmPrimitive::Json
            | EdmPrimitive::Single => false,
        }
    }
}

impl TypeMapper for JavaTypeMapper {
    fn language(&self) -> &'static str {
        "java"
    }

    fn reserved_words(&self) -> &ReservedWords {
        &JAVA_RESERVED
    }

    fn map_primitive(&self, primitive: EdmPrimitive) -> &'static str {
        Self::java_type(primitive)
    }

    fn map_flags_enum(&self, enum_name: &str) -> String {
        format!("EnumSet<{}>", enum_name)
    }

    fn is_simple_type_name(&self, type_name: &str) -> bool {
        SIMPLE_TYPE_NAMES.contains(&type_name)
    }

    fn qualify_reserved(&self, type_name: &str) -> String {
        format!("{}.{}", MODEL_NAMESPACE, type_name)
    }
}
