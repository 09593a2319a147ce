//! Core, format-agnostic types for resxcodec.
//! The store decodes containers into these; the writer serializes them back.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single resource entry: the unit of data stored in a container.
///
/// Entries are immutable by convention: construct them with [`ResxEntry::new`]
/// (optionally [`ResxEntry::with_comment`]) or receive them from
/// [`crate::store::read`], then treat them as values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResxEntry {
    /// Unique resource identifier (key) within one container.
    /// Must be non-empty whenever the entry is persisted.
    pub id: String,

    /// The localized content. May be empty and may span multiple lines;
    /// line endings are canonicalized to `\n` on read and write.
    pub value: String,

    /// Optional annotation for translators. Empty means "no comment".
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub comment: String,
}

impl ResxEntry {
    /// Creates an entry with no comment.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        ResxEntry {
            id: id.into(),
            value: value.into(),
            comment: String::new(),
        }
    }

    /// Attaches a comment to the entry.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl Display for ResxEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResxEntry {{ id: {}, value: {} }}", self.id, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_empty_comment() {
        let entry = ResxEntry::new("Greeting", "Hello");
        assert_eq!(entry.id, "Greeting");
        assert_eq!(entry.value, "Hello");
        assert_eq!(entry.comment, "");
    }

    #[test]
    fn test_with_comment() {
        let entry = ResxEntry::new("Greeting", "Hello").with_comment("shown at startup");
        assert_eq!(entry.comment, "shown at startup");
    }

    #[test]
    fn test_equality_by_value() {
        let a = ResxEntry::new("Greeting", "Hello").with_comment("c");
        let b = ResxEntry::new("Greeting", "Hello").with_comment("c");
        let c = ResxEntry::new("Greeting", "Hello").with_comment("other");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let entry = ResxEntry::new("Greeting", "Hello");
        let rendered = entry.to_string();
        assert!(rendered.contains("Greeting"));
        assert!(rendered.contains("Hello"));
    }
}
