//! Language-agnostic type mapping trait.

use edmgen_core::{
    EdmPrimitive, ParameterDescriptor, PropertyDescriptor, TypeDescriptor, upper_first,
};

use super::ReservedWords;

/// Trait for mapping schema types to language-specific type strings.
///
/// Implementors supply the primitive table, the flag-enum container and
/// the simple-type classification; resolution order is shared.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Reserved words of the target language
    fn reserved_words(&self) -> &ReservedWords;

    /// Map a primitive with a dedicated mapping to its type string
    fn map_primitive(&self, primitive: EdmPrimitive) -> &'static str;

    /// Wrap a flag enum in a multi-valued container type.
    ///
    /// Values of the returned type serialize as a delimited list of member
    /// names, so renderers must emit set (de)serialization for it.
    fn map_flags_enum(&self, enum_name: &str) -> String;

    /// Check a resolved type string against the simple (scalar) set
    fn is_simple_type_name(&self, type_name: &str) -> bool;

    /// Qualify a domain type string that collides with a reserved word
    fn qualify_reserved(&self, type_name: &str) -> String;

    /// Resolve a type descriptor to a type string.
    ///
    /// Flag enums win over everything else, then the primitive table, then
    /// the capitalized name, which assumes a generated type of that name.
    fn resolve_type_name(&self, ty: &TypeDescriptor) -> String {
        if ty.is_flags() {
            return self.map_flags_enum(&upper_first(&ty.name));
        }

        match EdmPrimitive::from_name(&ty.name) {
            Some(primitive) => self.map_primitive(primitive).to_string(),
            None => upper_first(&ty.name),
        }
    }

    /// Resolve a parameter's type string
    fn resolve_parameter_type(&self, parameter: &ParameterDescriptor) -> String {
        self.resolve_type_name(&parameter.ty)
    }

    /// Resolve a property's type string from its projected type.
    ///
    /// Domain types whose name collides with a reserved word are qualified.
    fn resolve_property_type(&self, property: &PropertyDescriptor) -> String {
        let ty = property.projected_type();
        let type_name = self.resolve_type_name(ty);
        if !ty.is_primitive() && self.reserved_words().is_reserved(&type_name) {
            self.qualify_reserved(&type_name)
        } else {
            type_name
        }
    }

    /// Returns true if the resolved type is a simple scalar
    fn is_simple(&self, ty: &TypeDescriptor) -> bool {
        self.is_simple_type_name(&self.resolve_type_name(ty))
    }

    fn is_simple_parameter(&self, parameter: &ParameterDescriptor) -> bool {
        self.is_simple_type_name(&self.resolve_parameter_type(parameter))
    }

    fn is_simple_property(&self, property: &PropertyDescriptor) -> bool {
        self.is_simple_type_name(&self.resolve_property_type(property))
    }

    /// Returns true if the type needs object handling (null checks, deep copies)
    fn is_complex(&self, ty: &TypeDescriptor) -> bool {
        !self.is_simple(ty)
    }
}
