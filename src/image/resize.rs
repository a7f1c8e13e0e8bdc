//! Square resampling.

use image::{imageops::FilterType, DynamicImage};

/// Filter used for every icon. Lanczos3 keeps small sizes sharp.
pub const RESAMPLING_FILTER: FilterType = FilterType::Lanczos3;

/// Resample `img` to exactly `edge` x `edge` pixels.
///
/// The aspect ratio is not preserved: a non-square source is stretched.
#[must_use]
pub fn resize_square(img: &DynamicImage, edge: u32) -> DynamicImage {
    img.resize_exact(edge, edge, RESAMPLING_FILTER)
}
