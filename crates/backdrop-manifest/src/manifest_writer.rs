//! Manifest rendering and writing
//!
//! Manifests are rendered with two-space indentation and no trailing newline,
//! and each write replaces the previous file wholesale.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::ManifestError;
use crate::types::RegistryItem;

/// Render an item exactly as it is written to disk
pub fn render(item: &RegistryItem) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(item)?)
}

/// Write an item to `output_path`, overwriting any existing file
pub fn write_to_path(item: &RegistryItem, output_path: &Path) -> Result<(), ManifestError> {
    debug!("Writing manifest for {} to {:?}", item.title, output_path);

    let json = render(item)?;
    fs::write(output_path, json)?;

    debug!(
        "Manifest written: {} dependencies, {} file(s)",
        item.dependencies.len(),
        item.files.len()
    );

    Ok(())
}
