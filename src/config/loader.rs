//! Node configuration loader
//!
//! Parses the node's plain-text configuration format, one `key = value`
//! assignment per line, into a [`ConfigDocument`]:
//!
//! 1. Blank lines and `#` comments are skipped
//! 2. Each remaining line splits on the first `=`
//! 3. A value wrapped in a matching pair of double quotes loses exactly one
//!    layer of quoting
//! 4. Values under list-valued keys split on whitespace into tokens
//! 5. `plugin` tokens are checked against the plugin registry
//!
//! The first failing line aborts the load. The document is indeterminate
//! after a failed load and callers must not rely on partial data.

use std::path::Path;

use crate::config::document::{ConfigDocument, ConfigValue};
use crate::config::registry::PluginRegistry;
use crate::config::schema::{KeySchema, keys};
use crate::error::ConfigError;

// ============================================================================
// Node Config
// ============================================================================

/// A node configuration file, parsed and validated.
///
/// Construct empty, populate with [`load_from_lines`](Self::load_from_lines)
/// (or the file/string conveniences), then query read-only. Instances are
/// not meant for concurrent use.
#[derive(Debug, Default)]
pub struct NodeConfig {
    doc: ConfigDocument,
    schema: KeySchema,
    registry: PluginRegistry,
}

impl NodeConfig {
    /// Creates an empty configuration with the default key schema and the
    /// default plugin registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty configuration validating plugins against a custom
    /// registry.
    #[must_use]
    pub fn with_registry(registry: PluginRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Creates an empty configuration with a custom registry and key schema.
    #[must_use]
    pub fn with_registry_and_schema(registry: PluginRegistry, schema: KeySchema) -> Self {
        Self {
            doc: ConfigDocument::new(),
            schema,
            registry,
        }
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Parses configuration lines into the document.
    ///
    /// Within one load and across repeated loads the same rule applies: the
    /// last occurrence of a key wins, and the key keeps its first position
    /// in the document. Repeated loads therefore merge incrementally.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] hit: `MalformedLine` for a line
    /// without `=`, `UnknownPlugin` for a plugin token missing from the
    /// registry, `EmptyPluginList` for a `plugin` line with no tokens.
    pub fn load_from_lines<I, S>(&mut self, lines: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (idx, line) in lines.into_iter().enumerate() {
            self.load_line(idx + 1, line.as_ref())?;
        }
        Ok(())
    }

    /// Parses a whole configuration file body.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`load_from_lines`](Self::load_from_lines).
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        self.load_from_lines(text.lines())
    }

    /// Reads and parses a configuration file from disk.
    ///
    /// The parser itself never touches the filesystem; this convenience is
    /// for callers that hold a path rather than lines, like the CLI checking
    /// a node's working directory before launch.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the file cannot be read, plus
    /// the failure modes of [`load_from_lines`](Self::load_from_lines).
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;
        self.load_from_str(&text)
    }

    /// Parses a single non-ignored line and stores the result.
    fn load_line(&mut self, line_no: usize, raw: &str) -> Result<(), ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let Some((key, raw_value)) = trimmed.split_once('=') else {
            return Err(ConfigError::MalformedLine {
                line: line_no,
                content: trimmed.to_string(),
            });
        };

        let key = key.trim();
        let raw_value = raw_value.trim();
        let (unquoted, was_quoted) = strip_quotes(raw_value);

        let value = if self.schema.is_list_valued(key) {
            let tokens: Vec<String> = unquoted.split_whitespace().map(str::to_string).collect();
            if key == keys::PLUGIN {
                self.validate_plugins(line_no, &tokens)?;
            }
            ConfigValue::List(tokens)
        } else if was_quoted {
            ConfigValue::Quoted(unquoted.to_string())
        } else {
            ConfigValue::Plain(unquoted.to_string())
        };

        tracing::trace!(line = line_no, key, "parsed configuration entry");
        self.doc.insert(key, value);
        Ok(())
    }

    /// Checks every plugin token against the registry.
    fn validate_plugins(&self, line_no: usize, tokens: &[String]) -> Result<(), ConfigError> {
        if tokens.is_empty() {
            return Err(ConfigError::EmptyPluginList { line: line_no });
        }

        for token in tokens {
            if !self.registry.contains(token) {
                return Err(ConfigError::UnknownPlugin {
                    plugin: token.clone(),
                    line: line_no,
                    suggestion: self.registry.suggest(token).map(str::to_string),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Generic Accessors
    // ========================================================================

    /// Returns the raw value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.doc.get(key)
    }

    /// Returns the scalar value stored under `key`.
    ///
    /// Quoted values read without their wrapping quotes. `None` for unset
    /// keys and for list-valued keys.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.doc.get(key).and_then(ConfigValue::as_str)
    }

    /// Returns the token list stored under `key`, empty if the key is unset
    /// or holds a scalar.
    #[must_use]
    pub fn get_list(&self, key: &str) -> &[String] {
        self.doc
            .get(key)
            .and_then(ConfigValue::as_list)
            .unwrap_or_default()
    }

    /// Returns the parsed document.
    #[must_use]
    pub const fn document(&self) -> &ConfigDocument {
        &self.doc
    }

    /// Returns the plugin registry this configuration validates against.
    #[must_use]
    pub const fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Re-serializes the configuration as `key = value` lines.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        self.doc.to_lines()
    }

    // ========================================================================
    // Named Accessors
    // ========================================================================

    /// Enabled plugins, empty before any load.
    #[must_use]
    pub fn plugins(&self) -> &[String] {
        self.get_list(keys::PLUGIN)
    }

    /// Directory holding the shared memory file.
    #[must_use]
    pub fn shared_file_dir(&self) -> Option<&str> {
        self.get_str(keys::SHARED_FILE_DIR)
    }

    /// Root directory for state snapshots.
    #[must_use]
    pub fn snapshot_root_dir(&self) -> Option<&str> {
        self.get_str(keys::SNAPSHOT_ROOT_DIR)
    }

    /// Storage path of the account history RocksDB plugin.
    #[must_use]
    pub fn account_history_rocksdb_path(&self) -> Option<&str> {
        self.get_str(keys::ACCOUNT_HISTORY_ROCKSDB_PATH)
    }

    /// Output file of the block log info plugin.
    #[must_use]
    pub fn block_log_info_print_file(&self) -> Option<&str> {
        self.get_str(keys::BLOCK_LOG_INFO_PRINT_FILE)
    }
}

/// Strips exactly one layer of wrapping double quotes.
///
/// Returns the possibly-unwrapped value and whether quotes were stripped.
/// Interior quotes survive: `"a"b"` unwraps to `a"b`.
fn strip_quotes(raw: &str) -> (&str, bool) {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        (&raw[1..raw.len() - 1], true)
    } else {
        (raw, false)
    }
}

// ============================================================================
// Tests
// ============================================================================
