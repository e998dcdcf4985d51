use thiserror::Error;

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Import paths can only be derived from dotted, namespace-qualified names.
    #[error("cannot derive an import path from unqualified type name '{name}'")]
    UnqualifiedTypeName { name: String },
}
