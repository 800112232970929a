//! Error types for `nodeconf`
//!
//! A domain-specific `ConfigError` for parse and validation failures, and a
//! top-level `NodeConfError` that aggregates everything the CLI can hit and
//! maps each error to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `nodeconf` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (malformed line, unknown plugin, bad registry)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `nodeconf` operations.
///
/// Aggregates the domain-specific errors and provides a unified interface
/// for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum NodeConfError {
    /// Configuration parsing or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NodeConfError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration parsing and validation errors.
///
/// The loader aborts on the first failing line, so at most one of these is
/// produced per load attempt. Line numbers are 1-based and count every input
/// line, including blanks and comments.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A line has no `=` separating key and value
    #[error("malformed line {line}: missing 'key = value' separator in '{content}'")]
    MalformedLine {
        /// 1-based line number within the supplied lines
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// A plugin token is not present in the registry
    #[error("unknown plugin '{plugin}' at line {line}{}", .suggestion.as_deref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
    UnknownPlugin {
        /// The offending plugin token
        plugin: String,
        /// 1-based line number within the supplied lines
        line: usize,
        /// Closest registry entry, when one is similar enough
        suggestion: Option<String>,
    },

    /// A `plugin` line with no tokens at all
    #[error("empty plugin list at line {line}")]
    EmptyPluginList {
        /// 1-based line number within the supplied lines
        line: usize,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// A plugin registry file could not be parsed
    #[error("invalid plugin registry {path}: {message}")]
    InvalidRegistry {
        /// Path to the registry file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `nodeconf` operations.
pub type Result<T> = std::result::Result<T, NodeConfError>;

// ============================================================================
// Tests
// ============================================================================
