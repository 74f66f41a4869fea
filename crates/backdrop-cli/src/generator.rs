//! Registry generation orchestrator
//!
//! Drives discovery, extraction and manifest writing for one run:
//! 1. Walk the components root (fatal on failure)
//! 2. For each component: read, extract, build, write (failures are logged
//!    and the batch moves on)
//! 3. Return a summary with the success count and the failures

use crate::errors::{describe, CommandError, ComponentError};
use crate::logger;
use backdrop_config::{Config, ProjectLayout};
use backdrop_manifest::{ItemFormat, RegistryItem};
use backdrop_scan::{naming, ComponentEntry, ComponentSource, ComponentWalker};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A component that could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFailure {
    pub name: String,
    pub message: String,
}

/// Outcome of a generation run
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Number of manifests written
    pub processed: usize,
    pub written: Vec<PathBuf>,
    pub failures: Vec<ComponentFailure>,
}

/// Builds registry items for every component under a project's layout
#[derive(Debug, Clone)]
pub struct RegistryGenerator {
    layout: ProjectLayout,
    walker: ComponentWalker,
    format: ItemFormat,
}

impl RegistryGenerator {
    pub fn new(layout: ProjectLayout, config: &Config) -> Self {
        let walker = ComponentWalker::from_config(layout.components_dir.clone(), config);
        RegistryGenerator {
            layout,
            walker,
            format: config.item_format(),
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Find eligible component files, with a spinner while scanning
    pub fn discover(&self) -> Result<Vec<ComponentEntry>, CommandError> {
        let display_root = self.layout.relative_to_root(&self.layout.components_dir);
        logger::spinner_start(&format!("Scanning {}...", display_root));

        let entries = match self.walker.discover() {
            Ok(entries) => entries,
            Err(e) => {
                logger::spinner_stop();
                return Err(e.into());
            }
        };

        logger::spinner_stop();
        logger::status(&format!(
            "Found {} component file(s) in {}",
            entries.len(),
            display_root
        ));
        Ok(entries)
    }

    /// Read one component and assemble its registry item
    pub fn build_item(&self, entry: &ComponentEntry) -> Result<RegistryItem, ComponentError> {
        let source = ComponentSource::load(entry)?;
        let metadata = source.metadata();
        let relative_path = self.layout.relative_to_root(&source.path);
        logger::step(&format!(
            "{}: {} dependencies, description {:?}",
            source.short_name,
            metadata.dependencies.len(),
            metadata.description
        ));

        Ok(RegistryItem::new(
            &self.format,
            &source.short_name,
            metadata.description,
            metadata.dependencies,
            relative_path,
            source.content,
        ))
    }

    /// Where the manifest for `entry` is written
    pub fn output_path(&self, entry: &ComponentEntry) -> PathBuf {
        self.layout
            .output_dir
            .join(naming::manifest_file_name(&entry.short_name))
    }

    fn process_entry(&self, entry: &ComponentEntry) -> Result<PathBuf, ComponentError> {
        let item = self.build_item(entry)?;
        let output_path = self.output_path(entry);
        backdrop_manifest::write_to_path(&item, &output_path)?;
        Ok(output_path)
    }

    /// Create the output directory if needed
    pub fn ensure_output_dir(&self) -> Result<(), CommandError> {
        let dir = &self.layout.output_dir;
        fs::create_dir_all(dir).map_err(|source| CommandError::OutputDir {
            path: dir.clone(),
            source,
        })
    }

    /// Run the whole batch.
    ///
    /// Only discovery and output directory setup can fail the run; each
    /// component's own failure is logged and recorded in the summary.
    pub fn generate(&self) -> Result<GenerateSummary, CommandError> {
        let entries = self.discover()?;
        self.ensure_output_dir()?;

        let mut summary = GenerateSummary::default();
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

        for entry in &entries {
            logger::status(&format!("Processing {}...", entry.short_name));

            let output_path = self.output_path(entry);
            if let Some(previous) = claimed.insert(output_path.clone(), entry.path.clone()) {
                logger::warn(&format!(
                    "{} and {} both map to {}; the later one wins",
                    self.layout.relative_to_root(&previous),
                    self.layout.relative_to_root(&entry.path),
                    self.display_path(&output_path)
                ));
            }

            match self.process_entry(entry) {
                Ok(written) => {
                    logger::success(&format!("Generated {}", self.display_path(&written)));
                    summary.processed += 1;
                    summary.written.push(written);
                }
                Err(e) => {
                    let message = describe(&e);
                    logger::error(&format!("Failed to process {}: {}", entry.short_name, message));
                    summary.failures.push(ComponentFailure {
                        name: entry.short_name.clone(),
                        message,
                    });
                }
            }
        }

        logger::info(&format!(
            "Generation finished: {} processed, {} failed",
            summary.processed,
            summary.failures.len()
        ));

        Ok(summary)
    }

    fn display_path(&self, path: &Path) -> String {
        self.layout.relative_to_root(path)
    }
}
