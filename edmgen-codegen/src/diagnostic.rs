//! Diagnostic types for mapping a model.
//!
//! Rename events and other notes produced while mapping are collected here
//! so the caller decides how to present them.

use serde::Serialize;

use crate::naming::{RenameEvent, RenameSink};

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A problem that makes the mapping unusable.
    Error,
    /// Something the model author should look at.
    Warning,
    /// Informational message, e.g. an identifier rename.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message produced while mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The stage that produced this diagnostic (e.g. "sanitize").
    pub stage: String,
    pub message: String,
    /// Optional location in the model (e.g., "user.class").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, stage, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, stage, message)
    }

    /// Create a new info diagnostic.
    pub fn info(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, stage, message)
    }

    fn new(severity: Severity, stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            stage: stage.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl From<RenameEvent> for Diagnostic {
    fn from(event: RenameEvent) -> Self {
        Diagnostic::info("sanitize", event.to_string())
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// Collected diagnostics, in the order they were reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity.is_error())
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.items.iter().filter(|d| d.severity.is_warning()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RenameSink for Diagnostics {
    fn record(&mut self, event: RenameEvent) {
        self.push(event.into());
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
