//! Reserved-word tables.

/// Prefix prepended to identifiers that collide with a Java reserved word.
pub const RENAME_PREFIX: &str = "msgraph";

/// A fixed set of reserved words plus the prefix used to escape them.
///
/// Membership is case-insensitive: `Class` and `CLASS` are reserved in the
/// same way as `class`.
#[derive(Debug, Clone, Copy)]
pub struct ReservedWords {
    words: &'static [&'static str],
    rename_prefix: &'static str,
}

impl ReservedWords {
    pub const fn new(words: &'static [&'static str], rename_prefix: &'static str) -> Self {
        Self {
            words,
            rename_prefix,
        }
    }

    /// Check if a name is a reserved word, ignoring case.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.words.iter().any(|word| word.eq_ignore_ascii_case(name))
    }

    /// The prefix prepended to reserved identifiers.
    pub fn rename_prefix(&self) -> &'static str {
        self.rename_prefix
    }

    /// Escape a name by prepending the rename prefix. Casing is preserved.
    pub fn escape(&self, name: &str) -> String {
        format!("{}{}", self.rename_prefix, name)
    }

    /// Iterate over every reserved word.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Java keywords plus the `true`, `false` and `null` literals.
pub const JAVA_RESERVED: ReservedWords = ReservedWords::new(
    &[
        "abstract", "continue", "for", "new", "switch", "assert", "default", "if", "package",
        "synchronized", "boolean", "do", "goto", "private", "this", "break", "double",
        "implements", "protected", "throw", "byte", "else", "import", "public", "throws", "case",
        "enum", "instanceof", "return", "transient", "catch", "extends", "int", "short", "try",
        "char", "final", "interface", "static", "void", "class", "finally", "long", "strictfp",
        "volatile", "const", "float", "native", "super", "while", "true", "false", "null",
    ],
    RENAME_PREFIX,
);
