//! Target-language type and identifier mapping for EDM models.
//!
//! Given the descriptors produced by a schema loader, this crate decides
//! which type-name string to emit in generated Java source and how to turn
//! a model identifier into a legal, non-colliding Java identifier.
//!
//! # Module Organization
//!
//! - [`language`] - Reserved-word table and the [`TypeMapper`](language::TypeMapper) trait
//! - [`mappers`] - Language type mappers ([`JavaTypeMapper`](mappers::JavaTypeMapper))
//! - [`naming`] - Identifier sanitizing and rename events
//! - [`generation`] - Import path derivation and collection
//! - [`diagnostic`] - Diagnostic channel for rename events
//! - [`plan`] - Whole-model mapping plan

pub mod diagnostic;
mod error;
pub mod generation;
pub mod language;
pub mod mappers;
pub mod naming;
pub mod plan;

pub use error::{Error, Result};
