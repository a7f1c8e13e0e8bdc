//! Image loading, resizing, and saving utilities.

mod load;
mod resize;
mod save;

pub use load::load_image;
pub use resize::{resize_square, RESAMPLING_FILTER};
pub use save::save_image;
