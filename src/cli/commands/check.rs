//! `check` command handler
//!
//! Parses and validates node configuration files without launching a node.
//! Orchestration code runs this against a node's working directory before
//! startup; the first invalid file aborts the run with a config error.

use serde::Serialize;

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::{NodeConfig, PluginRegistry};
use crate::error::NodeConfError;

/// Validation report for a single configuration file.
#[derive(Debug, Serialize)]
struct CheckReport {
    /// Path of the checked file.
    file: String,
    /// Number of keys parsed.
    keys: usize,
    /// Plugins enabled by the file.
    plugins: Vec<String>,
}

/// Parse and validate the given configuration files.
///
/// # Errors
///
/// Returns a config error for the first file that fails to parse or
/// validate, or an I/O error if a registry override cannot be loaded.
pub fn run(args: &CheckArgs) -> Result<(), NodeConfError> {
    let registry = load_registry(args.registry.as_deref())?;

    for path in &args.files {
        tracing::info!(file = %path.display(), "checking configuration");

        let mut config = NodeConfig::with_registry(registry.clone());
        config.load_file(path)?;

        let report = CheckReport {
            file: path.display().to_string(),
            keys: config.document().len(),
            plugins: config.plugins().to_vec(),
        };

        match args.format {
            OutputFormat::Human => {
                println!(
                    "{}: ok ({} keys, {} plugins)",
                    report.file,
                    report.keys,
                    report.plugins.len()
                );
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&report)?);
            }
        }
    }

    Ok(())
}

/// Loads the registry override, falling back to the built-in registry.
pub(super) fn load_registry(
    path: Option<&std::path::Path>,
) -> Result<PluginRegistry, NodeConfError> {
    match path {
        Some(p) => {
            tracing::debug!(registry = %p.display(), "loading plugin registry override");
            Ok(PluginRegistry::from_file(p)?)
        }
        None => Ok(PluginRegistry::default()),
    }
}
