//! Loading of `model.toml` model descriptions.
//!
//! A model file declares the types of one schema namespace and the
//! properties of each type; loading resolves every type reference into an
//! [`edmgen_core::Model`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{Manifest, ModelConfig, ModelToml, PropertySpec, TypeSpec};
