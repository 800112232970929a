//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod get;
pub mod plugins;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::NodeConfError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), NodeConfError> {
    match cli.command {
        Commands::Check(args) => check::run(&args),
        Commands::Get(args) => get::run(&args),
        Commands::Plugins(args) => plugins::run(&args),
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
