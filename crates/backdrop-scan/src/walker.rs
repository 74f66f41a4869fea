use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::errors::ScanError;
use crate::naming;
use backdrop_config::Config;

/// One candidate component file found under the components root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    pub short_name: String,
    pub path: PathBuf,
}

/// Walker for `<root>/<Component>/<Component>.<ext>` layouts
///
/// Only files exactly one directory below the root are considered. Files
/// directly in the root and anything nested deeper are ignored.
#[derive(Debug, Clone)]
pub struct ComponentWalker {
    root: PathBuf,
    extension: String,
    exclude: Vec<String>,
}

impl ComponentWalker {
    /// Create a walker using the extension and exclusion markers from `config`
    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        ComponentWalker {
            root: root.into(),
            extension: config.get_extension(),
            exclude: config.get_exclude(),
        }
    }

    /// Whether a file name passes the extension and exclusion filters.
    ///
    /// Markers are plain case-sensitive substrings, each checked on its own:
    /// `AuroraCopy` passes the default `copy` marker but `OldAurora` fails `Old`.
    pub fn is_eligible(&self, file_name: &str) -> bool {
        let suffix = format!(".{}", self.extension);
        file_name.ends_with(&suffix)
            && !self
                .exclude
                .iter()
                .any(|marker| file_name.contains(marker.as_str()))
    }

    /// Collect eligible files in directory-listing order.
    ///
    /// Only the root level is statted, to tell component folders apart from
    /// stray files; a failure there, or a folder that cannot be listed, aborts
    /// discovery. Files inside a folder are chosen by name alone and never
    /// statted, so a broken link or a directory named like a component is
    /// returned and fails when read.
    pub fn discover(&self) -> Result<Vec<ComponentEntry>, ScanError> {
        let metadata = fs::metadata(&self.root).map_err(|source| ScanError::Root {
            path: self.root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        debug!("Scanning components root: {:?}", self.root);

        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.map_err(|source| ScanError::Walk {
                path: source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone()),
                source,
            })?;

            if !entry.file_type().is_dir() {
                debug!("Skipping stray entry in components root: {:?}", entry.path());
                continue;
            }

            skipped += self.collect_from(entry.path(), &mut entries)?;
        }

        info!(
            "Discovered {} component file(s), skipped {} other file(s)",
            entries.len(),
            skipped
        );

        Ok(entries)
    }

    /// Add the eligible files of one component folder, returning how many
    /// names were filtered out
    fn collect_from(
        &self,
        dir: &Path,
        entries: &mut Vec<ComponentEntry>,
    ) -> Result<usize, ScanError> {
        let listing_error = |source| ScanError::Listing {
            path: dir.to_path_buf(),
            source,
        };

        let mut skipped = 0usize;
        for item in fs::read_dir(dir).map_err(listing_error)? {
            let item = item.map_err(listing_error)?;
            let file_name = item.file_name().to_string_lossy().into_owned();
            if !self.is_eligible(&file_name) {
                skipped += 1;
                continue;
            }

            let short_name = naming::short_name(&file_name, &self.extension).to_string();
            debug!("Found component {} at {:?}", short_name, item.path());
            entries.push(ComponentEntry {
                short_name,
                path: item.path(),
            });
        }
        Ok(skipped)
    }
}
