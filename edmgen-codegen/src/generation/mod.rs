//! Import path handling for generated sources.
//!
//! - [`lowercased_import_path`] - Lowercase the package part of a qualified name
//! - [`ImportCollector`] - Import tracking and deduplication

mod imports;

pub use imports::{ImportCollector, derive_lowercased_import_path, lowercased_import_path};
