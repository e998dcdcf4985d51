//! Import path derivation and collection.

use std::collections::BTreeSet;

use edmgen_core::{PropertyDescriptor, upper_first};
use indexmap::IndexMap;

use crate::{Error, Result};

/// Lowercase everything before the last `.` of a qualified name.
///
/// The final segment is kept as is: `com.Example.Models.Foo` becomes
/// `com.example.models.Foo`. Names without a `.` are rejected.
pub fn lowercased_import_path(qualified_name: &str) -> Result<String> {
    let index = qualified_name
        .rfind('.')
        .ok_or_else(|| Error::UnqualifiedTypeName {
            name: qualified_name.to_string(),
        })?;
    let (package, type_name) = qualified_name.split_at(index);
    Ok(format!("{}{}", package.to_lowercase(), type_name))
}

/// Import path of a property's projected type.
pub fn derive_lowercased_import_path(property: &PropertyDescriptor) -> Result<String> {
    lowercased_import_path(&property.projected_type().qualified_name())
}

/// Tracks Java imports and deduplicates them.
///
/// Packages keep insertion order; classes within a package are sorted.
///
/// # Example
///
/// ```
/// use edmgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("java.util", "EnumSet");
/// imports.add("microsoft.graph", "User");
///
/// assert_eq!(
///     imports.lines(),
///     vec!["import java.util.EnumSet;", "import microsoft.graph.User;"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Package -> set of class names
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class import from a package.
    pub fn add(&mut self, package: &str, class: &str) {
        self.imports
            .entry(package.to_string())
            .or_default()
            .insert(class.to_string());
    }

    /// Add whatever a property's projected type needs imported.
    ///
    /// Flag enums pull in `java.util.EnumSet`. Domain types are imported
    /// from their lowercased package and the derived path is returned;
    /// primitives need nothing. A domain type without a qualified name is an
    /// error and leaves the collector unchanged apart from `EnumSet`.
    pub fn add_property(&mut self, property: &PropertyDescriptor) -> Result<Option<String>> {
        let ty = property.projected_type();
        if ty.is_flags() {
            self.add("java.util", "EnumSet");
        }
        if ty.is_primitive() {
            return Ok(None);
        }
        let path = derive_lowercased_import_path(property)?;
        if let Some((package, class)) = path.rsplit_once('.') {
            self.add(package, &upper_first(class));
        }
        Ok(Some(path))
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (package, classes) in &other.imports {
            let entry = self.imports.entry(package.clone()).or_default();
            entry.extend(classes.iter().cloned());
        }
    }

    /// Check if a specific class is imported from a package.
    pub fn has_class(&self, package: &str, class: &str) -> bool {
        self.imports
            .get(package)
            .is_some_and(|classes| classes.contains(class))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as Java import statements.
    pub fn lines(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(package, classes)| {
                classes
                    .iter()
                    .map(move |class| format!("import {}.{};", package, class))
            })
            .collect()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use edmgen_core::TypeDescriptor;

    use super::*;

    #[test]
    fn test_lowercased_import_path() {
        assert_eq!(
            lowercased_import_path("com.Example.Models.Foo").unwrap(),
            "com.example.models.Foo"
        );
        assert_eq!(lowercased_import_path("A.b").unwrap(), "a.b");
        assert_eq!(lowercased_import_path(".Foo").unwrap(), ".Foo");
    }

    #[test]
    fn test_unqualified_name_is_rejected() {
        assert_eq!(
            lowercased_import_path("Foo"),
            Err(Error::UnqualifiedTypeName {
                name: "Foo".to_string()
            })
        );
        assert!(lowercased_import_path("").is_err());
    }

    #[test]
    fn test_derive_from_property() {
        let prop = PropertyDescriptor::new(
            "manager",
            "user",
            TypeDescriptor::domain("directoryObject").in_namespace("Microsoft.Graph"),
        );
        assert_eq!(
            derive_lowercased_import_path(&prop).unwrap(),
            "microsoft.graph.directoryObject"
        );

        let prop = PropertyDescriptor::new(
            "foo",
            "bar",
            TypeDescriptor::domain("com.Example.Models.Foo"),
        );
        assert_eq!(
            derive_lowercased_import_path(&prop).unwrap(),
            "com.example.models.Foo"
        );
    }

    #[test]
    fn test_derive_uses_projection() {
        let prop = PropertyDescriptor::new("photo", "user", TypeDescriptor::primitive("Binary"))
            .with_projection(TypeDescriptor::domain("profilePhoto").in_namespace("Graph"));
        assert_eq!(
            derive_lowercased_import_path(&prop).unwrap(),
            "graph.profilePhoto"
        );
    }

    #[test]
    fn test_collector_add_property() {
        let mut imports = ImportCollector::new();
        let path = imports
            .add_property(&PropertyDescriptor::new(
                "manager",
                "user",
                TypeDescriptor::domain("directoryObject").in_namespace("microsoft.graph"),
            ))
            .unwrap();
        assert_eq!(path.as_deref(), Some("microsoft.graph.directoryObject"));
        imports
            .add_property(&PropertyDescriptor::new(
                "colors",
                "user",
                TypeDescriptor::enumeration("color", true).in_namespace("microsoft.graph"),
            ))
            .unwrap();
        let path = imports
            .add_property(&PropertyDescriptor::new(
                "id",
                "user",
                TypeDescriptor::primitive("Guid"),
            ))
            .unwrap();
        assert_eq!(path, None);

        assert!(imports.has_class("microsoft.graph", "DirectoryObject"));
        assert!(imports.has_class("microsoft.graph", "Color"));
        assert!(imports.has_class("java.util", "EnumSet"));
        assert_eq!(
            imports.lines(),
            vec![
                "import microsoft.graph.Color;",
                "import microsoft.graph.DirectoryObject;",
                "import java.util.EnumSet;",
            ]
        );
    }

    #[test]
    fn test_collector_rejects_unqualified_domain_type() {
        let mut imports = ImportCollector::new();
        let err = imports
            .add_property(&PropertyDescriptor::new(
                "local",
                "user",
                TypeDescriptor::domain("local"),
            ))
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnqualifiedTypeName {
                name: "local".to_string()
            }
        );
        assert!(imports.is_empty());
    }

    #[test]
    fn test_collector_deduplicates_and_merges() {
        let mut a = ImportCollector::new();
        a.add("microsoft.graph", "User");
        a.add("microsoft.graph", "User");

        let mut b = ImportCollector::new();
        b.add("microsoft.graph", "Group");
        b.add("java.util", "EnumSet");

        a.merge(&b);
        assert_eq!(a.iter().count(), 2);
        assert_eq!(a.lines().len(), 3);
        assert!(!a.is_empty());
        assert!(ImportCollector::new().is_empty());
    }
}
