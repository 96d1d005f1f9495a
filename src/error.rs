use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting the drawing as an image
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export surface would have no pixels
    #[error("cannot export an empty {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    /// The export surface would need more memory than we are willing to allocate
    #[error("cannot export a {width}x{height} surface, the limit is {limit} pixels")]
    TooLarge { width: u64, height: u64, limit: u64 },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The browser refused to start the download
    #[error("download failed: {0}")]
    Download(String),
}

/// Errors that can occur while loading the pad configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
