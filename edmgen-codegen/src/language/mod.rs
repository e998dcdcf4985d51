//! Language-specific abstractions.
//!
//! - [`ReservedWords`] - Keywords and literals that cannot be used verbatim
//! - [`TypeMapper`] - Trait for mapping schema types to language type strings

mod reserved;
mod traits;

pub use reserved::{JAVA_RESERVED, RENAME_PREFIX, ReservedWords};
pub use traits::TypeMapper;
