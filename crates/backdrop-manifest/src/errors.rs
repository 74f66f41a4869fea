use std::io;
use thiserror::Error;

/// Errors that can occur while writing or reading a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error")]
    Io(#[from] io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}
