//! Node configuration parsing and validation.

pub mod document;
pub mod loader;
pub mod registry;
pub mod schema;

pub use document::{ConfigDocument, ConfigValue};
pub use loader::NodeConfig;
pub use registry::PluginRegistry;
pub use schema::KeySchema;
