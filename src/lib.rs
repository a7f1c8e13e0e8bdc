//! # appicon-gen
//!
//! Generates every icon size an iOS `AppIcon` set needs from one source image.
//!
//! The source is decoded once, then resampled with Lanczos3 to each of the
//! fourteen fixed sizes in [`APP_ICON_SIZES`] and saved as PNG.
//!
//! ## Example
//!
//! ```no_run
//! use appicon_gen::{Config, IconGenerator};
//!
//! # fn main() -> appicon_gen::Result<()> {
//! let generator = IconGenerator::new(Config::default())?;
//!
//! let report = generator.generate("logo.png", "AppIcon.appiconset")?;
//! assert_eq!(report.icons.len(), 14);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod image;

pub use error::{Error, Result};
pub use generator::{
    Config, GeneratedIcon, GenerationReport, IconGenerator, SizeSpec, APP_ICON_SIZES,
};
