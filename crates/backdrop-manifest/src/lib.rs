//! Backdrop Registry Manifests
//!
//! One manifest describes one background component for the external registry
//! catalog. Each is written as pretty-printed JSON with a fixed field order so
//! committed manifests diff cleanly between runs.

pub mod errors;
pub mod manifest_writer;
pub mod types;

pub use errors::ManifestError;
pub use types::{
    ItemFormat, RegistryFile, RegistryItem, BLOCK_ITEM_TYPE, COMPONENT_FILE_TYPE,
    REGISTRY_ITEM_SCHEMA,
};

pub use manifest_writer::{render, write_to_path};
