//! The closed set of `Edm` primitive types.

use std::str::FromStr;

/// Primitive types of the `Edm` namespace that have a dedicated mapping.
///
/// Any `Edm` type not listed here (String, Boolean, Double, ...) is mapped by
/// the generic capitalize fallback, so it has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdmPrimitive {
    Int16,
    Int32,
    Int64,
    Guid,
    DateTimeOffset,
    Date,
    TimeOfDay,
    Duration,
    Json,
    Binary,
    Single,
}

impl EdmPrimitive {
    /// Every primitive, in declaration order.
    pub const ALL: [EdmPrimitive; 11] = [
        EdmPrimitive::Int16,
        EdmPrimitive::Int32,
        EdmPrimitive::Int64,
        EdmPrimitive::Guid,
        EdmPrimitive::DateTimeOffset,
        EdmPrimitive::Date,
        EdmPrimitive::TimeOfDay,
        EdmPrimitive::Duration,
        EdmPrimitive::Json,
        EdmPrimitive::Binary,
        EdmPrimitive::Single,
    ];

    /// Get the type name as it appears in metadata (without the `Edm.` prefix)
    pub fn as_str(&self) -> &'static str {
        match self {
            EdmPrimitive::Int16 => "Int16",
            EdmPrimitive::Int32 => "Int32",
            EdmPrimitive::Int64 => "Int64",
            EdmPrimitive::Guid => "Guid",
            EdmPrimitive::DateTimeOffset => "DateTimeOffset",
            EdmPrimitive::Date => "Date",
            EdmPrimitive::TimeOfDay => "TimeOfDay",
            EdmPrimitive::Duration => "Duration",
            EdmPrimitive::Json => "Json",
            EdmPrimitive::Binary => "Binary",
            EdmPrimitive::Single => "Single",
        }
    }

    /// Look up a primitive by its metadata name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl FromStr for EdmPrimitive {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("'{}' is not a mapped Edm primitive", s))
    }
}

impl std::fmt::Display for EdmPrimitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
