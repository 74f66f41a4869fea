//! Resolve the directories a generator run works in
//!
//! Config values are relative to the project root; the layout turns them into
//! concrete paths once so every stage agrees on the same locations.

use crate::settings::Config;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Error type for layout resolution
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// The project root does not exist or is not a directory
    RootNotFound(PathBuf),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::RootNotFound(path) => {
                write!(f, "Project root not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Absolute locations used by one generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub components_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout for `project_root` using the directories in `config`.
    ///
    /// Only the root has to exist. A missing components directory is reported
    /// later by discovery, and the output directory is created on demand.
    pub fn resolve(project_root: &Path, config: &Config) -> Result<Self, LayoutError> {
        if !project_root.is_dir() {
            return Err(LayoutError::RootNotFound(project_root.to_path_buf()));
        }
        let root = fs::canonicalize(project_root)
            .map_err(|_| LayoutError::RootNotFound(project_root.to_path_buf()))?;

        let components_dir = root.join(config.get_components_dir());
        let output_dir = root.join(config.get_output_dir());

        Ok(ProjectLayout {
            root,
            components_dir,
            output_dir,
        })
    }

    /// Replace the components directory, resolving relative paths against the root
    pub fn with_components_dir(mut self, dir: &Path) -> Self {
        self.components_dir = self.root.join(dir);
        self
    }

    /// Replace the output directory, resolving relative paths against the root
    pub fn with_output_dir(mut self, dir: &Path) -> Self {
        self.output_dir = self.root.join(dir);
        self
    }

    /// Path of `path` relative to the project root, always with `/` separators.
    ///
    /// Paths outside the root are returned unchanged.
    pub fn relative_to_root(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(relative) => relative
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => path.to_string_lossy().into_owned(),
        }
    }
}
