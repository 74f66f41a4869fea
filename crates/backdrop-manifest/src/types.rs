//! Registry item types
//!
//! Field declaration order is the serialized order:
//! `$schema`, `name`, `type`, `title`, `description`, `dependencies`, `files`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Schema tag embedded in every manifest
pub const REGISTRY_ITEM_SCHEMA: &str = "https://ui.shadcn.com/schema/registry-item.json";

/// Item kind for a background component entry
pub const BLOCK_ITEM_TYPE: &str = "registry:block";

/// Kind of the single file carried by an item
pub const COMPONENT_FILE_TYPE: &str = "registry:component";

/// The constant tags stamped onto every item of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFormat {
    pub schema: String,
    pub item_type: String,
    pub file_type: String,
}

impl Default for ItemFormat {
    fn default() -> Self {
        ItemFormat {
            schema: REGISTRY_ITEM_SCHEMA.to_string(),
            item_type: BLOCK_ITEM_TYPE.to_string(),
            file_type: COMPONENT_FILE_TYPE.to_string(),
        }
    }
}

/// Manifest for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryItem {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub files: SmallVec<[RegistryFile; 1]>,
}

/// Source file embedded in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Path relative to the project root, `/` separated
    pub path: String,
    /// Verbatim source text
    pub content: String,
    #[serde(rename = "type")]
    pub file_type: String,
}

impl RegistryItem {
    /// Build the manifest for a component titled `title`.
    ///
    /// The registry name is always the lowercased title.
    pub fn new(
        format: &ItemFormat,
        title: &str,
        description: String,
        dependencies: Vec<String>,
        path: String,
        content: String,
    ) -> Self {
        let mut files = SmallVec::new();
        files.push(RegistryFile {
            path,
            content,
            file_type: format.file_type.clone(),
        });

        RegistryItem {
            schema: format.schema.clone(),
            name: title.to_lowercase(),
            item_type: format.item_type.clone(),
            title: title.to_string(),
            description,
            dependencies,
            files,
        }
    }
}
