// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run configuration. The defaults are the fixed sprite-sheet layout; a JSON
// file may override any subset of fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{Result, SpritecutError};

/// Default sprite sheet location, relative to the working directory.
pub const DEFAULT_SOURCE_PATH: &str = "avatar-sheet.jpg";

/// Default directory the cropped portraits are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Fractions of the source width/height that position the portrait grid.
///
/// Every value is multiplied by the relevant source dimension and truncated
/// toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridFractions {
    /// Portrait width as a fraction of the sheet width.
    pub box_width: f64,
    /// Portrait height as a fraction of the sheet height.
    pub box_height: f64,
    /// Left edge of the first column.
    pub col1_x: f64,
    /// Left edge of the second column.
    pub col2_x: f64,
    /// Top edges of the three rows.
    pub row1_y: f64,
    pub row2_y: f64,
    pub row3_y: f64,
}

impl Default for GridFractions {
    fn default() -> Self {
        Self {
            box_width: 0.43,
            box_height: 0.25,
            col1_x: 0.025,
            col2_x: 0.52,
            row1_y: 0.08,
            row2_y: 0.37,
            row3_y: 0.66,
        }
    }
}

impl GridFractions {
    fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("box_width", self.box_width),
            ("box_height", self.box_height),
            ("col1_x", self.col1_x),
            ("col2_x", self.col2_x),
            ("row1_y", self.row1_y),
            ("row2_y", self.row2_y),
            ("row3_y", self.row3_y),
        ]
    }

    /// Reject fractions that are not finite or fall outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.named() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SpritecutError::Config(format!(
                    "fractions.{field} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Sprite sheet to read.
    pub source_path: PathBuf,
    /// Directory the PNG portraits are written into.
    pub output_dir: PathBuf,
    /// Grid placement fractions.
    pub fractions: GridFractions,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fractions: GridFractions::default(),
        }
    }
}

impl CropConfig {
    /// Read and validate a JSON config file. Missing fields take their defaults.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        debug!(
            source = %config.source_path.display(),
            output = %config.output_dir.display(),
            "Config loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(SpritecutError::Config("source_path is empty".into()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(SpritecutError::Config("output_dir is empty".into()));
        }
        self.fractions.validate()
    }

    /// Path a portrait named `name` is written to.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.png"))
    }
}
