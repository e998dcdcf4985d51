//! Identifier sanitizer.

use edmgen_core::{PropertyDescriptor, lower_first, upper_first};
use serde::Serialize;

use crate::language::{JAVA_RESERVED, ReservedWords};

/// Upper bound on self-collision renames for a single identifier.
///
/// Renaming a property after its type can only recurse once before the
/// candidate stops matching the owner, so this is never reached for
/// well-formed input.
pub const MAX_RENAME_DEPTH: usize = 4;

/// Characters removed from identifiers.
const INVALID_CHARS: &[char] = &['@', '.'];

/// Suffix appended when a property, its type and its class share a name.
const PROPERTY_SUFFIX: &str = "Property";

/// The type a property is declared on, used to detect self-naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerContext {
    /// Name of the declaring class.
    pub name: String,
    /// Name of the property's (projected) type.
    pub property_type_name: String,
}

impl OwnerContext {
    pub fn new(name: impl Into<String>, property_type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_type_name: property_type_name.into(),
        }
    }

    /// Owner context of a property: its declaring type and projected type.
    pub fn for_property(property: &PropertyDescriptor) -> Self {
        Self::new(
            &property.declaring_type_name,
            &property.projected_type().name,
        )
    }
}

/// Why an identifier was renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameReason {
    /// The identifier is a reserved word.
    ReservedWord,
    /// The property, its type and its declaring class share one name.
    SelfNamedProperty,
}

/// An identifier rename, reported to the caller's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEvent {
    pub original: String,
    pub renamed: String,
    pub reason: RenameReason,
}

impl std::fmt::Display for RenameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            RenameReason::ReservedWord => write!(
                f,
                "'{}' is a reserved word in Java, renamed to '{}'",
                self.original, self.renamed
            ),
            RenameReason::SelfNamedProperty => write!(
                f,
                "property type '{}' has the same name as its class, renamed to '{}'",
                self.original, self.renamed
            ),
        }
    }
}

/// Receiver for rename events.
pub trait RenameSink {
    fn record(&mut self, event: RenameEvent);
}

impl RenameSink for Vec<RenameEvent> {
    fn record(&mut self, event: RenameEvent) {
        self.push(event);
    }
}

/// A sanitized identifier together with the renames that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub name: String,
    pub events: Vec<RenameEvent>,
}

/// Maps raw model identifiers to legal identifiers.
///
/// The policy, first match wins:
/// 1. reserved word: prepend the rename prefix
/// 2. property named like its class: suffix with `Property` when the type
///    shares the name too, otherwise rename after the type and start over
/// 3. otherwise strip `@` and `.`
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer<'r> {
    reserved: &'r ReservedWords,
}

impl Sanitizer<'static> {
    /// Sanitizer for Java identifiers.
    pub fn java() -> Self {
        Self::new(&JAVA_RESERVED)
    }
}

impl Default for Sanitizer<'static> {
    fn default() -> Self {
        Self::java()
    }
}

impl<'r> Sanitizer<'r> {
    pub fn new(reserved: &'r ReservedWords) -> Self {
        Self { reserved }
    }

    pub fn reserved_words(&self) -> &'r ReservedWords {
        self.reserved
    }

    /// Sanitize an identifier, collecting rename events into the result.
    pub fn sanitize(&self, raw: &str, owner: Option<&OwnerContext>) -> Sanitized {
        let mut events: Vec<RenameEvent> = Vec::new();
        let name = self.sanitize_into(raw, owner, &mut events);
        Sanitized { name, events }
    }

    /// Sanitize an identifier, reporting rename events to `sink`.
    pub fn sanitize_into(
        &self,
        raw: &str,
        owner: Option<&OwnerContext>,
        sink: &mut dyn RenameSink,
    ) -> String {
        self.sanitize_at(raw, owner, sink, 0)
    }

    /// Sanitize a property name in the context of its declaring type.
    pub fn sanitize_property(
        &self,
        property: &PropertyDescriptor,
        sink: &mut dyn RenameSink,
    ) -> String {
        let owner = OwnerContext::for_property(property);
        self.sanitize_into(&property.name, Some(&owner), sink)
    }

    /// Two rules keep the result a fixed point of `sanitize`: the
    /// `Property` suffix goes on the stripped name, and a name that is only
    /// reserved once `@`/`.` are removed (`class@`) still gets the prefix.
    fn sanitize_at(
        &self,
        raw: &str,
        owner: Option<&OwnerContext>,
        sink: &mut dyn RenameSink,
        depth: usize,
    ) -> String {
        if self.reserved.is_reserved(raw) {
            return self.rename_reserved(raw, sink);
        }

        if let Some(owner) = owner.filter(|_| depth < MAX_RENAME_DEPTH) {
            let class_name = upper_first(&owner.name);
            if upper_first(raw) == class_name {
                let type_name = upper_first(&owner.property_type_name);
                if type_name == class_name {
                    let renamed = format!("{}{}", strip_invalid(raw), PROPERTY_SUFFIX);
                    sink.record(RenameEvent {
                        original: raw.to_string(),
                        renamed: renamed.clone(),
                        reason: RenameReason::SelfNamedProperty,
                    });
                    return renamed;
                }

                return self.sanitize_at(&type_name, Some(owner), sink, depth + 1);
            }
        }

        let stripped = strip_invalid(raw);
        // "class@" strips down to a reserved word
        if stripped.len() != raw.len() && self.reserved.is_reserved(&stripped) {
            return self.rename_reserved(&stripped, sink);
        }
        stripped
    }

    fn rename_reserved(&self, name: &str, sink: &mut dyn RenameSink) -> String {
        let renamed = self.reserved.escape(name);
        sink.record(RenameEvent {
            original: name.to_string(),
            renamed: renamed.clone(),
            reason: RenameReason::ReservedWord,
        });
        renamed
    }
}

fn strip_invalid(name: &str) -> String {
    name.chars().filter(|c| !INVALID_CHARS.contains(c)).collect()
}

/// Field-style name of a property (first character lowercased).
pub fn member_name(property: &PropertyDescriptor) -> String {
    lower_first(&property.name)
}

#[cfg(test)]
mod tests {
    use edmgen_core::TypeDescriptor;

    use super::*;

    fn sanitize(raw: &str, owner: Option<&OwnerContext>) -> Sanitized {
        Sanitizer::java().sanitize(raw, owner)
    }

    #[test]
    fn test_reserved_word_is_prefixed() {
        let result = sanitize("class", None);
        assert_eq!(result.name, "msgraphclass");
        assert_eq!(
            result.events,
            vec![RenameEvent {
                original: "class".to_string(),
                renamed: "msgraphclass".to_string(),
                reason: RenameReason::ReservedWord,
            }]
        );
    }

    #[test]
    fn test_reserved_word_keeps_casing() {
        let result = sanitize("Default", None);
        assert_eq!(result.name, "msgraphDefault");
        assert_eq!(result.events.len(), 1);
    }

    #[test]
    fn test_reserved_wins_over_self_naming() {
        let owner = OwnerContext::new("class", "class");
        assert_eq!(sanitize("class", Some(&owner)).name, "msgraphclass");
    }

    #[test]
    fn test_self_named_property_with_same_type_gets_suffix() {
        let owner = OwnerContext::new("Foo", "Foo");
        let result = sanitize("Foo", Some(&owner));
        assert_eq!(result.name, "FooProperty");
        assert_eq!(result.events.len(), 1);
        assert_eq!(result.events[0].reason, RenameReason::SelfNamedProperty);
    }

    #[test]
    fn test_self_naming_compares_capitalized() {
        let owner = OwnerContext::new("foo", "foo");
        assert_eq!(sanitize("foo", Some(&owner)).name, "fooProperty");

        let owner = OwnerContext::new("Foo", "foo");
        assert_eq!(sanitize("foo", Some(&owner)).name, "fooProperty");
    }

    #[test]
    fn test_self_named_property_takes_type_name() {
        let owner = OwnerContext::new("Foo", "Bar");
        let result = sanitize("Foo", Some(&owner));
        assert_eq!(result.name, "Bar");
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_self_named_property_type_is_capitalized() {
        let owner = OwnerContext::new("foo", "bar");
        assert_eq!(sanitize("foo", Some(&owner)).name, "Bar");
    }

    #[test]
    fn test_self_named_property_with_reserved_type() {
        let owner = OwnerContext::new("Foo", "boolean");
        let result = sanitize("Foo", Some(&owner));
        assert_eq!(result.name, "msgraphBoolean");
        assert_eq!(result.events.len(), 1);
        assert_eq!(result.events[0].reason, RenameReason::ReservedWord);
    }

    #[test]
    fn test_unrelated_owner_is_ignored() {
        let owner = OwnerContext::new("User", "String");
        assert_eq!(sanitize("displayName", Some(&owner)).name, "displayName");
    }

    #[test]
    fn test_invalid_characters_are_stripped() {
        let result = sanitize("user@odata.type", None);
        assert_eq!(result.name, "userodatatype");
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_no_case_transformation() {
        assert_eq!(sanitize("DisplayName", None).name, "DisplayName");
        assert_eq!(sanitize("displayName", None).name, "displayName");
    }

    #[test]
    fn test_stripping_down_to_reserved_word() {
        let result = sanitize("class@", None);
        assert_eq!(result.name, "msgraphclass");
        assert_eq!(result.events.len(), 1);
    }

    #[test]
    fn test_empty_names_pass_through() {
        assert_eq!(sanitize("", None).name, "");
        assert_eq!(sanitize("@.", None).name, "");
    }

    #[test]
    fn test_empty_owner_names_terminate() {
        let owner = OwnerContext::new("", "x");
        assert_eq!(sanitize("", Some(&owner)).name, "X");

        let owner = OwnerContext::new("", "");
        assert_eq!(sanitize("", Some(&owner)).name, "Property");
    }

    #[test]
    fn test_idempotent_without_owner() {
        let inputs = [
            "class", "Class", "user@odata.type", "displayName", "", "null", "class@", "a.b.c",
            "msgraphclass", "@odata.context",
        ];
        for input in inputs {
            let once = sanitize(input, None).name;
            let twice = sanitize(&once, None);
            assert_eq!(twice.name, once, "input {:?}", input);
            assert!(twice.events.is_empty(), "input {:?}", input);
        }
    }

    #[test]
    fn test_idempotent_after_owner_rename() {
        let owner = OwnerContext::new("Foo", "Foo");
        let once = sanitize("Foo", Some(&owner)).name;
        assert_eq!(sanitize(&once, None).name, once);
    }

    #[test]
    fn test_sanitize_into_sink() {
        let mut events: Vec<RenameEvent> = Vec::new();
        let sanitizer = Sanitizer::java();
        assert_eq!(sanitizer.sanitize_into("import", None, &mut events), "msgraphimport");
        assert_eq!(sanitizer.sanitize_into("name", None, &mut events), "name");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_sanitize_property_uses_projection() {
        let prop = PropertyDescriptor::new("photo", "photo", TypeDescriptor::primitive("Binary"))
            .with_projection(TypeDescriptor::domain("profilePhoto"));
        let mut events: Vec<RenameEvent> = Vec::new();
        assert_eq!(
            Sanitizer::java().sanitize_property(&prop, &mut events),
            "ProfilePhoto"
        );
    }

    #[test]
    fn test_member_name() {
        let prop = PropertyDescriptor::new("DisplayName", "user", TypeDescriptor::primitive("String"));
        assert_eq!(member_name(&prop), "displayName");
    }

    #[test]
    fn test_rename_event_display() {
        let result = sanitize("class", None);
        assert_eq!(
            result.events[0].to_string(),
            "'class' is a reserved word in Java, renamed to 'msgraphclass'"
        );
    }
}
