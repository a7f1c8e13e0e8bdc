//! Image saving utilities.

use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};

/// Save an icon as a PNG, replacing any existing file at `path`.
///
/// Floating point images are narrowed to 16-bit RGBA first since the PNG
/// encoder has no float color types.
///
/// # Errors
///
/// Returns [`Error::ImageSave`] if the image cannot be encoded or written.
pub fn save_image<P: AsRef<Path>>(img: &DynamicImage, path: P) -> Result<()> {
    let path = path.as_ref();

    let result = match img {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba16(img.to_rgba16()).save_with_format(path, ImageFormat::Png)
        }
        _ => img.save_with_format(path, ImageFormat::Png),
    };

    result.map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}
