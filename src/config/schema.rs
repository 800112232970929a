//! Key schema for the node configuration format
//!
//! Most configuration keys are scalars; a few hold space-separated token
//! lists. Which keys are list-valued is a property of the node software, so
//! the schema is data the caller can extend rather than logic baked into the
//! parser.

use std::collections::BTreeSet;

/// Well-known configuration keys read by the harness.
pub mod keys {
    /// Plugin enable list; the only list-valued key of the default schema.
    pub const PLUGIN: &str = "plugin";

    /// Directory holding the shared memory file.
    pub const SHARED_FILE_DIR: &str = "shared_file_dir";

    /// Root directory for state snapshots.
    pub const SNAPSHOT_ROOT_DIR: &str = "snapshot_root_dir";

    /// Storage path of the account history RocksDB plugin.
    pub const ACCOUNT_HISTORY_ROCKSDB_PATH: &str = "account_history_rocksdb_path";

    /// Output file of the block log info plugin.
    pub const BLOCK_LOG_INFO_PRINT_FILE: &str = "block_log_info_print_file";
}

// ============================================================================
// Key Schema
// ============================================================================

/// The set of list-valued configuration keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchema {
    list_keys: BTreeSet<String>,
}

impl KeySchema {
    /// Adds a list-valued key to the schema.
    #[must_use]
    pub fn with_list_key(mut self, key: impl Into<String>) -> Self {
        self.list_keys.insert(key.into());
        self
    }

    /// Returns `true` if values under `key` split into token lists.
    #[must_use]
    pub fn is_list_valued(&self, key: &str) -> bool {
        self.list_keys.contains(key)
    }
}

impl Default for KeySchema {
    /// The default schema: only `plugin` is list-valued.
    fn default() -> Self {
        Self {
            list_keys: BTreeSet::from([keys::PLUGIN.to_string()]),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
