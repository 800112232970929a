//! Parsed configuration document
//!
//! An ordered key/value store for parsed node configuration. Keys are unique;
//! inserting an existing key overwrites the value in place, so a document
//! re-serialized with [`ConfigDocument::to_lines`] keeps the original key
//! order even after overwrites.

use indexmap::IndexMap;
use serde::Serialize;

// ============================================================================
// Config Value
// ============================================================================

/// A single parsed configuration value.
///
/// The three forms correspond to the value syntaxes of the node's
/// configuration file: bare scalars, double-quoted strings, and
/// space-separated token lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Bare scalar value, stored as written (trimmed).
    Plain(String),

    /// Double-quoted value, stored with the wrapping quotes stripped.
    ///
    /// The quoting is remembered so re-serialization can restore it.
    Quoted(String),

    /// Space-separated token list for list-valued keys.
    List(Vec<String>),
}

impl ConfigValue {
    /// Returns the scalar form of this value, if it is not a list.
    ///
    /// `Plain` and `Quoted` values both read as plain strings; the wrapping
    /// quotes of a `Quoted` value are not part of the string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Plain(s) | Self::Quoted(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Returns the token list form of this value, if it is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(tokens) => Some(tokens),
            Self::Plain(_) | Self::Quoted(_) => None,
        }
    }

    /// Renders the value in configuration-file syntax.
    fn to_file_syntax(&self) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Quoted(s) => format!("\"{s}\""),
            Self::List(tokens) => tokens.join(" "),
        }
    }
}

// ============================================================================
// Config Document
// ============================================================================

/// Ordered mapping from configuration key to parsed value.
///
/// Lookup is by key; iteration and re-serialization follow insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    entries: IndexMap<String, ConfigValue>,
}

impl ConfigDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under a key, overwriting any prior value.
    ///
    /// An overwritten key keeps its original position in the document.
    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.entries.insert(key.into(), value);
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Returns the number of keys in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no keys have been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Re-serializes the document as `key = value` lines in insertion order.
    ///
    /// Quoted values are re-wrapped in double quotes and lists are joined
    /// with single spaces, so a loaded document writes back in the syntax the
    /// node process reads.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key} = {}", value.to_file_syntax()))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
