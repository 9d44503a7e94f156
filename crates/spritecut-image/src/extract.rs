// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end extraction: load the sheet, build the crop table, then crop and
// save every portrait in table order.

use spritecut_core::config::CropConfig;
use spritecut_core::error::{Result, SpritecutError};
use spritecut_core::layout::build_crop_table;
use spritecut_core::types::{ExtractionReport, SavedCrop};
use tracing::{info, instrument};

use crate::export::save_png;
use crate::sheet::SpriteSheet;

/// Milestones reported while an extraction runs.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// The sheet decoded; its dimensions drive the crop table.
    Loaded { width: u32, height: u32 },
    /// One portrait was written.
    Saved(&'a SavedCrop),
}

/// Run one extraction with `config`.
///
/// `on_progress` sees the sheet dimensions once it loads, then each file
/// after it is written, in table order. Nothing is written unless the sheet
/// loads and every region fits inside it; the output directory is only
/// created once both checks pass. The first error aborts the run.
#[instrument(skip_all, fields(source = %config.source_path.display()))]
pub fn extract_avatars(
    config: &CropConfig,
    mut on_progress: impl FnMut(Progress<'_>),
) -> Result<ExtractionReport> {
    config.validate()?;

    let sheet = SpriteSheet::open(&config.source_path)?;
    let (width, height) = sheet.dimensions();
    on_progress(Progress::Loaded { width, height });
    let table = build_crop_table(width, height, &config.fractions);

    for region in &table {
        sheet.check_bounds(region)?;
    }

    std::fs::create_dir_all(&config.output_dir).map_err(|err| SpritecutError::Write {
        path: config.output_dir.clone(),
        detail: err.to_string(),
    })?;

    let mut saved = Vec::with_capacity(table.len());
    for region in &table {
        let cropped = sheet.crop(region)?;
        let record = save_png(&cropped, &config.output_path(&region.name), &region.name)?;
        on_progress(Progress::Saved(&record));
        saved.push(record);
    }

    info!(count = saved.len(), "All portraits saved");
    Ok(ExtractionReport {
        source_width: width,
        source_height: height,
        saved,
    })
}
