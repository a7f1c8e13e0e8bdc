//! `appicon-gen` CLI - Generate iOS app icons from a single image.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appicon_gen::{Config, IconGenerator};

/// Resize one source image into every icon size of an iOS `AppIcon` set.
#[derive(Parser, Debug)]
#[command(name = "appicon-gen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source image path. At least 1024x1024 is recommended.
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Output directory, created if missing.
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Disable the progress bar.
    #[arg(long)]
    no_progress: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("appicon_gen={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = Config {
        show_progress: !args.no_progress,
        ..Config::default()
    };

    let generator = IconGenerator::new(config).context("Invalid configuration")?;

    let report = generator
        .generate(&args.source, &args.output_dir)
        .context("Failed to generate app icons")?;

    tracing::debug!(
        "Wrote {} icons from a {}x{} source",
        report.icons.len(),
        report.source_dimensions.0,
        report.source_dimensions.1
    );

    Ok(())
}
