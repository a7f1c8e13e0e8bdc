//! Custom error types for appicon-gen.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the appicon-gen library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or decode the source image.
    #[error("failed to load image from {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an icon file.
    #[error("failed to save image to {path}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to create the output directory.
    #[error("failed to create output directory {path}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type alias for appicon-gen operations.
pub type Result<T> = std::result::Result<T, Error>;
