//! `get` command handler
//!
//! Prints the value of one configuration key, in the value's natural form:
//! scalars print as-is (without wrapping quotes), lists print as
//! space-separated tokens.

use crate::cli::args::GetArgs;
use crate::config::{ConfigValue, NodeConfig};
use crate::error::NodeConfError;

/// Print the value stored under a key.
///
/// # Errors
///
/// Returns a config error if the file fails to parse or validate, and an
/// I/O error if the key is not set in the file.
pub fn run(args: &GetArgs) -> Result<(), NodeConfError> {
    let registry = super::check::load_registry(args.registry.as_deref())?;

    let mut config = NodeConfig::with_registry(registry);
    config.load_file(&args.file)?;

    match config.get(&args.key) {
        Some(ConfigValue::List(tokens)) => println!("{}", tokens.join(" ")),
        Some(value) => {
            // as_str is Some for every non-list value
            if let Some(s) = value.as_str() {
                println!("{s}");
            }
        }
        None => {
            return Err(NodeConfError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("key '{}' is not set in {}", args.key, args.file.display()),
            )));
        }
    }

    Ok(())
}
