// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PNG export. Each crop is encoded in memory, written in one call, and
// fingerprinted with SHA-256 so repeated runs can be compared byte for byte.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use sha2::{Digest, Sha256};
use spritecut_core::error::{Result, SpritecutError};
use spritecut_core::types::SavedCrop;
use tracing::{debug, instrument};

/// Encode an RGB image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> std::result::Result<Vec<u8>, image::ImageError> {
    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// Write `image` as PNG to `path`, replacing any existing file. `name` is the
/// portrait the file holds.
#[instrument(skip(image, path), fields(path = %path.display()))]
pub fn save_png(image: &RgbImage, path: &Path, name: &str) -> Result<SavedCrop> {
    let bytes = encode_png(image).map_err(|err| SpritecutError::Write {
        path: path.to_path_buf(),
        detail: format!("PNG encoding failed: {err}"),
    })?;
    std::fs::write(path, &bytes).map_err(|err| SpritecutError::Write {
        path: path.to_path_buf(),
        detail: err.to_string(),
    })?;

    let sha256 = hex::encode(Sha256::digest(&bytes));
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        sha256 = %sha256,
        "PNG written"
    );

    Ok(SavedCrop {
        name: name.to_string(),
        path: path.to_path_buf(),
        width: image.width(),
        height: image.height(),
        sha256,
    })
}
