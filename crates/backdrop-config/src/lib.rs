//! Configuration for the backdrop registry generator
//!
//! Settings live in an optional `backdrop.toml` at the project root. Every key
//! has a default that matches the component catalog layout, so a project
//! without a config file still generates the expected manifests.

pub mod layout;
pub mod settings;

pub use layout::{LayoutError, ProjectLayout};
pub use settings::{Config, ConfigError, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
