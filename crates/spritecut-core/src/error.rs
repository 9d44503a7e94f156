// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Spritecut.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::CropRect;

/// Top-level error type for all Spritecut operations.
///
/// None of these are recovered from: every variant aborts the run.
#[derive(Debug, Error)]
pub enum SpritecutError {
    // -- Load --
    #[error("source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to decode {}: {detail}", .path.display())]
    Decode { path: PathBuf, detail: String },

    // -- Crop --
    #[error("crop region {name} {rect} does not fit inside the {image_width}x{image_height} image")]
    OutOfBounds {
        name: String,
        rect: CropRect,
        image_width: u32,
        image_height: u32,
    },

    // -- Save --
    #[error("failed to write {}: {detail}", .path.display())]
    Write { path: PathBuf, detail: String },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SpritecutError {
    /// Name of the pipeline stage that produced this error.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::SourceNotFound(_) | Self::Decode { .. } => "load",
            Self::OutOfBounds { .. } => "crop",
            Self::Write { .. } => "save",
            Self::Config(_) | Self::Io(_) | Self::Serialization(_) => "config",
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SpritecutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_follow_the_pipeline() {
        assert_eq!(
            SpritecutError::SourceNotFound("a.jpg".into()).stage(),
            "load"
        );
        let oob = SpritecutError::OutOfBounds {
            name: "avatar_er_pr".into(),
            rect: CropRect::new(10, 10, 5, 5),
            image_width: 12,
            image_height: 12,
        };
        assert_eq!(oob.stage(), "crop");
        let write = SpritecutError::Write {
            path: "public/avatar_er_pr.png".into(),
            detail: "permission denied".into(),
        };
        assert_eq!(write.stage(), "save");
        assert_eq!(SpritecutError::Config("x".into()).stage(), "config");
    }

    #[test]
    fn out_of_bounds_message_names_region_and_extent() {
        let err = SpritecutError::OutOfBounds {
            name: "avatar_er_coder".into(),
            rect: CropRect::new(520, 80, 430, 250),
            image_width: 900,
            image_height: 1000,
        };
        let msg = err.to_string();
        assert!(msg.contains("avatar_er_coder"), "{msg}");
        assert!(msg.contains("900x1000"), "{msg}");
    }
}
