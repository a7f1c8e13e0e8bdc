//! Icon set generation.

use std::fs;
use std::path::{Path, PathBuf};

use image::GenericImageView;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::image::{load_image, resize_square, save_image};

use super::sizes::{SizeSpec, APP_ICON_SIZES, MIN_SOURCE_EDGE};

/// Configuration for the icon generator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source width or height below this triggers a low-quality warning.
    pub min_source_edge: u32,

    /// Whether to draw a progress bar while generating.
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_source_edge: MIN_SOURCE_EDGE,
            show_progress: true,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.min_source_edge == 0 {
            return Err(Error::InvalidParameter {
                name: "min_source_edge".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// An icon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// Size table entry the icon was made from.
    pub spec: SizeSpec,
    /// Where the icon was saved.
    pub path: PathBuf,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Width and height of the decoded source.
    pub source_dimensions: (u32, u32),
    /// Directory the icons were written into.
    pub output_dir: PathBuf,
    /// Icons in generation order.
    pub icons: Vec<GeneratedIcon>,
    min_source_edge: u32,
}

impl GenerationReport {
    /// Whether the source was smaller than the recommended edge in either dimension.
    #[must_use]
    pub const fn is_low_resolution(&self) -> bool {
        let (width, height) = self.source_dimensions;
        width < self.min_source_edge || height < self.min_source_edge
    }
}

/// Generates the full `AppIcon` set from one source image.
#[derive(Debug, Clone, Default)]
pub struct IconGenerator {
    config: Config,
}

impl IconGenerator {
    /// Create a new generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Resize `source_path` to every entry of [`APP_ICON_SIZES`] and write the
    /// results into `output_dir`.
    ///
    /// The output directory is created first, including missing parents. A
    /// source that cannot be decoded aborts the run before any icon is
    /// written. A failed save aborts the run too, leaving the icons written
    /// so far in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the source cannot
    /// be decoded, or an icon cannot be saved.
    pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source_path: P,
        output_dir: Q,
    ) -> Result<GenerationReport> {
        let source_path = source_path.as_ref();
        let output_dir = output_dir.as_ref();

        fs::create_dir_all(output_dir).map_err(|source| Error::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        tracing::info!("Loading source image: {}", source_path.display());
        let source = load_image(source_path)?;

        let mut report = GenerationReport {
            source_dimensions: source.dimensions(),
            output_dir: output_dir.to_path_buf(),
            icons: Vec::with_capacity(APP_ICON_SIZES.len()),
            min_source_edge: self.config.min_source_edge,
        };

        if report.is_low_resolution() {
            let (width, height) = report.source_dimensions;
            let min = self.config.min_source_edge;
            tracing::warn!(
                "Source image is {width}x{height}, smaller than {min}x{min}; smaller icons may be low quality"
            );
        }

        let pb = self.progress_bar();

        for spec in APP_ICON_SIZES {
            let path = output_dir.join(spec.filename);

            tracing::debug!("Resizing to {}x{}", spec.edge, spec.edge);
            let icon = resize_square(&source, spec.edge);
            save_image(&icon, &path)?;

            pb.suspend(|| {
                println!("Generated: {} ({}x{})", spec.filename, spec.edge, spec.edge);
            });
            pb.inc(1);

            report.icons.push(GeneratedIcon { spec, path });
        }

        pb.finish_and_clear();

        println!("\nAll app icons generated in: {}", output_dir.display());
        println!("Add these icons to the AppIcon set in your Xcode project's Assets.xcassets");

        Ok(report)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(APP_ICON_SIZES.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Generating [{bar:40.cyan/blue}] {pos}/{len}")
                .expect("valid template")
                .progress_chars("#>-"),
        );
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> IconGenerator {
        IconGenerator::new(Config {
            show_progress: false,
            ..Config::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_config_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().min_source_edge, 1024);
    }

    #[test]
    fn test_zero_min_edge_rejected() {
        let config = Config {
            min_source_edge: 0,
            ..Config::default()
        };

        assert!(matches!(
            IconGenerator::new(config),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_low_resolution_either_dimension() {
        let report = |source_dimensions| GenerationReport {
            source_dimensions,
            output_dir: PathBuf::new(),
            icons: Vec::new(),
            min_source_edge: 1024,
        };

        assert!(!report((1024, 1024)).is_low_resolution());
        assert!(!report((2048, 1500)).is_low_resolution());
        assert!(report((1023, 2048)).is_low_resolution());
        assert!(report((2048, 512)).is_low_resolution());
    }

    #[test]
    fn test_generate_in_table_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.png");
        image::DynamicImage::new_rgb8(64, 64).save(&source).unwrap();
        let out = dir.path().join("AppIcon");

        let report = quiet().generate(&source, &out).unwrap();

        assert!(report.is_low_resolution());
        assert_eq!(report.source_dimensions, (64, 64));
        let specs: Vec<_> = report.icons.iter().map(|icon| icon.spec).collect();
        assert_eq!(specs, APP_ICON_SIZES);
        assert!(report.icons.iter().all(|icon| icon.path.parent() == Some(out.as_path())));
    }

    #[test]
    fn test_output_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let result = quiet().generate(dir.path().join("source.png"), blocker.join("out"));
        assert!(matches!(result, Err(Error::OutputDir { .. })));
    }
}
