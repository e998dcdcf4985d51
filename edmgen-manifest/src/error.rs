use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find(needle),
            message: message.into(),
        })
    }

    /// Create an unknown type reference error.
    pub fn unknown_type_error(
        &self,
        reference: impl Into<String>,
        property: impl Into<String>,
    ) -> Box<Error> {
        let reference = reference.into();
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span: self.find_value(&reference),
            reference,
            property: property.into(),
        })
    }

    /// Create an error for `flags = true` on a non-enum type.
    pub fn flags_on_non_enum_error(&self, type_name: impl Into<String>) -> Box<Error> {
        let type_name = type_name.into();
        Box::new(Error::FlagsOnNonEnum {
            src: self.named_source(),
            span: self.find(&format!("types.{}]", type_name)),
            type_name,
        })
    }

    /// Find the first occurrence of `needle`.
    fn find(&self, needle: &str) -> Option<SourceSpan> {
        if needle.is_empty() {
            return None;
        }
        self.src
            .find(needle)
            .map(|pos| SourceSpan::from((pos, needle.len())))
    }

    /// Find a quoted string value, excluding the quotes.
    fn find_value(&self, value: &str) -> Option<SourceSpan> {
        self.src
            .find(&format!("\"{}\"", value))
            .map(|pos| SourceSpan::from((pos + 1, value.len())))
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the model description with --model <path>"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model description")]
    #[diagnostic(code(edmgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown type '{reference}' on property '{property}'")]
    #[diagnostic(
        code(edmgen::unknown_type),
        help("reference an Edm primitive (e.g. 'Edm.String') or a type declared under [types]")
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared")]
        span: Option<SourceSpan>,
        reference: String,
        property: String,
    },

    #[error("type '{type_name}' sets flags but is not an enum")]
    #[diagnostic(
        code(edmgen::flags_on_non_enum),
        help("only kind = \"enum\" types can have flag semantics")
    )]
    FlagsOnNonEnum {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        type_name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(edmgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
