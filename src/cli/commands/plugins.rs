//! `plugins` command handler
//!
//! Lists the plugin registry the validator checks `plugin` lines against.

use crate::cli::args::{OutputFormat, PluginsArgs};
use crate::error::NodeConfError;

/// Print the plugin registry.
///
/// # Errors
///
/// Returns an error if a registry override cannot be loaded or serialized.
pub fn run(args: &PluginsArgs) -> Result<(), NodeConfError> {
    let registry = super::check::load_registry(args.registry.as_deref())?;
    let names: Vec<&str> = registry.names().collect();

    match args.format {
        OutputFormat::Human => {
            for name in names {
                println!("{name}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&names)?);
        }
    }

    Ok(())
}
