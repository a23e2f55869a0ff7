use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting the canvas as an image
#[derive(Debug, Error)]
pub enum ExportError {
    /// The rendered pixels could not be encoded
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    /// The encoded image could not be written to disk
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The browser refused to start the download
    #[error("browser download failed: {0}")]
    Browser(String),
}

/// Errors that can occur while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
