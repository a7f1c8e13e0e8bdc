//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageError, ImageReader};

use crate::error::{Error, Result};

/// Load and decode an image from disk.
///
/// The format is guessed from the file contents rather than the extension,
/// so a PNG saved as `logo.img` still decodes.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let to_error = |source: ImageError| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| to_error(ImageError::IoError(err)))?
        .decode()
        .map_err(to_error)?;

    let (width, height) = img.dimensions();
    tracing::debug!(
        "Decoded {} ({width}x{height}, {:?})",
        path.display(),
        img.color()
    );

    Ok(img)
}
