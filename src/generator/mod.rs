//! App icon generation from a single source image.

mod icons;
mod sizes;

pub use icons::{Config, GeneratedIcon, GenerationReport, IconGenerator};
pub use sizes::{SizeSpec, APP_ICON_SIZES, MIN_SOURCE_EDGE};
