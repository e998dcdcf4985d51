//! Core model types for the edmgen type mapper.
//!
//! This crate provides the read-only view of a parsed EDM schema that the
//! mapping layer consumes: type, property and parameter descriptors, the
//! closed set of `Edm` primitives, and casing helpers shared across the
//! workspace.

mod model;
mod primitive;
mod utils;

pub use model::{
    Model, NamespaceKind, ParameterDescriptor, PropertyDescriptor, TypeDefinition, TypeDescriptor,
    TypeKind,
};
pub use primitive::EdmPrimitive;
pub use utils::{lower_first, upper_first};
