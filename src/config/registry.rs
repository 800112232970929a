//! Plugin whitelist registry
//!
//! The set of plugin names the node process accepts on its `plugin`
//! configuration line. The authoritative list lives in the node software and
//! moves across releases, so the registry is injectable: construct one from
//! any list of names or load one from a JSON string-array file. The built-in
//! default mirrors the node release this harness currently targets.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::ConfigError;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
///
/// Low enough to catch one-character slips in short names like `p2p`.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Plugin names accepted by the targeted node release.
const DEFAULT_PLUGINS: &[&str] = &[
    "account_by_key",
    "account_by_key_api",
    "account_history",
    "account_history_api",
    "account_history_rocksdb",
    "block_api",
    "block_data_export",
    "block_log_info",
    "chain",
    "chain_api",
    "condenser_api",
    "database_api",
    "debug_node",
    "debug_node_api",
    "json_rpc",
    "market_history",
    "market_history_api",
    "network_broadcast_api",
    "p2p",
    "rc",
    "rc_api",
    "reputation",
    "reputation_api",
    "rewards_api",
    "sql_serializer",
    "state_snapshot",
    "statsd",
    "tags",
    "tags_api",
    "transaction_status",
    "transaction_status_api",
    "webserver",
    "witness",
];

// ============================================================================
// Plugin Registry
// ============================================================================

/// A fixed whitelist of valid plugin names.
///
/// Immutable after construction; the loader checks every token of a
/// `plugin` line against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRegistry {
    names: BTreeSet<String>,
}

impl PluginRegistry {
    /// Creates a registry from an explicit list of plugin names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads a registry from a JSON file containing an array of names.
    ///
    /// This is the escape hatch for tracking the node software's registry
    /// across versions without rebuilding the harness.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the file cannot be read and
    /// [`ConfigError::InvalidRegistry`] if it is not a JSON string array.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let names: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| ConfigError::InvalidRegistry {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if names.is_empty() {
            return Err(ConfigError::InvalidRegistry {
                path: path.to_path_buf(),
                message: "registry must list at least one plugin".to_string(),
            });
        }

        Ok(Self::new(names))
    }

    /// Returns `true` if `name` is a valid plugin.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the registry entry closest to `name`, if any is close enough
    /// to be a plausible typo.
    #[must_use]
    pub fn suggest(&self, name: &str) -> Option<&str> {
        if name.is_empty() {
            return None;
        }

        self.names
            .iter()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, candidate)| candidate.as_str())
    }

    /// Iterates over plugin names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for PluginRegistry {
    /// The plugin set of the node release this harness targets.
    fn default() -> Self {
        Self::new(DEFAULT_PLUGINS.iter().copied())
    }
}

// ============================================================================
// Tests
// ============================================================================
