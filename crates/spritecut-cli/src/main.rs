// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// crop-avatars — slices the agent avatar sprite sheet into five PNG portraits.
//
// Entry point. Initialises logging, resolves the configuration (fixed defaults
// or an optional JSON file), runs the extraction, and maps failures to a
// diagnostic plus a non-zero exit status.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use spritecut_core::CropConfig;
use spritecut_core::error::{Result, SpritecutError};
use spritecut_core::human_errors::humanize_error;
use spritecut_image::{Progress, extract_avatars};

#[derive(Parser, Debug)]
#[command(name = "crop-avatars")]
#[command(version, long_about = None)]
#[command(about = "Crop the agent avatar portraits out of the sprite sheet")]
struct Args {
    /// JSON config overriding the source path, output directory, or grid fractions
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Default to warnings only so stdout carries just the progress lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    execute(
        &args,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

/// Run once, writing progress to `out` and any diagnostic to `diag`.
fn execute(args: &Args, out: &mut impl Write, diag: &mut impl Write) -> ExitCode {
    match run(args.config.as_deref(), out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(stage = err.stage(), error = %err, "Extraction failed");
            // Nothing more to report if stderr itself is gone.
            let _ = writeln!(diag, "error: {}", humanize_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let config = match config_path {
        Some(path) => CropConfig::load(path)?,
        None => CropConfig::default(),
    };
    tracing::info!(
        source = %config.source_path.display(),
        output = %config.output_dir.display(),
        "Spritecut starting"
    );

    let mut write_error = None;
    extract_avatars(&config, |event| {
        let written = match event {
            Progress::Loaded { width, height } => writeln!(out, "Image size: {width}x{height}"),
            Progress::Saved(saved) => writeln!(
                out,
                "Saved: {} ({}x{})",
                saved.path.display(),
                saved.width,
                saved.height
            ),
        };
        if let Err(err) = written {
            write_error.get_or_insert(err);
        }
    })?;
    if let Some(err) = write_error {
        return Err(SpritecutError::Io(err));
    }

    writeln!(out, "Done!")?;
    Ok(())
}
