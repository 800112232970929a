//! CLI argument definitions
//!
//! All Clap derive structs for `nodeconf` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Configuration loader and validator for blockchain node test networks.
#[derive(Parser, Debug)]
#[command(name = "nodeconf", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "NODECONF_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and validate node configuration files.
    Check(CheckArgs),

    /// Print the value of a single configuration key.
    Get(GetArgs),

    /// List the plugin registry used for validation.
    Plugins(PluginsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Path to a JSON plugin registry overriding the built-in one.
    #[arg(long, env = "NODECONF_REGISTRY")]
    pub registry: Option<PathBuf>,
}

/// Arguments for `get`.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration file to read.
    pub file: PathBuf,

    /// Configuration key to print.
    pub key: String,

    /// Path to a JSON plugin registry overriding the built-in one.
    #[arg(long, env = "NODECONF_REGISTRY")]
    pub registry: Option<PathBuf>,
}

/// Arguments for `plugins`.
#[derive(Args, Debug)]
pub struct PluginsArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Path to a JSON plugin registry overriding the built-in one.
    #[arg(long, env = "NODECONF_REGISTRY")]
    pub registry: Option<PathBuf>,
}

/// Arguments for `version`.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
