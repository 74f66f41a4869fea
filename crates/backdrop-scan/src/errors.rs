use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or reading component sources
///
/// Messages carry the path only; the underlying cause is the error source.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Components directory not readable: {path}")]
    Root { path: PathBuf, source: io::Error },

    #[error("Components path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to scan {path}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Failed to list component folder {path}")]
    Listing { path: PathBuf, source: io::Error },

    #[error("Failed to read {path}")]
    Read { path: PathBuf, source: io::Error },
}
