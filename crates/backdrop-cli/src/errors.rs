//! Centralized error types for the backdrop CLI
//!
//! Library crates report their own errors; this module wraps them into the
//! two failure classes of a run: fatal command errors and per-component
//! errors that are logged while the batch continues.

use backdrop_config::{ConfigError, LayoutError};
use backdrop_manifest::ManifestError;
use backdrop_scan::ScanError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Discovery(#[from] ScanError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Failed to create output directory {path}")]
    OutputDir { path: PathBuf, source: io::Error },

    #[error("Failed to list output directory {path}")]
    OutputListing { path: PathBuf, source: io::Error },

    #[error("Config file already exists: {0} (use --force to overwrite)")]
    ConfigExists(PathBuf),

    #[error("Registry is out of date: {0} problem(s) found, run `backdrop generate`")]
    Drift(usize),
}

/// Errors confined to a single component
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error(transparent)]
    Source(#[from] ScanError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Render an error and its causes on one line, outermost first
pub fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}
