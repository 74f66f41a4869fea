//! Component discovery and metadata extraction
//!
//! This crate covers the read side of a registry build:
//! 1. Walking the components root for eligible source files ([`walker`])
//! 2. Deriving short names and manifest file names ([`naming`])
//! 3. Pulling dependencies and a description out of the source text ([`extractor`])
//!
//! Extraction is a textual scan, not a parse. It never fails; missing
//! information falls back to defaults.
pub mod errors;
pub mod extractor;
pub mod naming;
pub mod walker;

pub use errors::ScanError;
pub use extractor::{extract_dependencies, extract_description, extract_metadata, ComponentMetadata};
pub use walker::{ComponentEntry, ComponentWalker};

use std::fs;
use std::path::PathBuf;

/// A component file read from disk for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSource {
    pub path: PathBuf,
    pub short_name: String,
    pub content: String,
}

impl ComponentSource {
    /// Read the entry's file. Non-UTF-8 content is an error for this component only.
    pub fn load(entry: &ComponentEntry) -> Result<Self, ScanError> {
        let content = fs::read_to_string(&entry.path).map_err(|source| ScanError::Read {
            path: entry.path.clone(),
            source,
        })?;

        Ok(ComponentSource {
            path: entry.path.clone(),
            short_name: entry.short_name.clone(),
            content,
        })
    }

    pub fn metadata(&self) -> ComponentMetadata {
        extract_metadata(&self.content, &self.short_name)
    }
}
