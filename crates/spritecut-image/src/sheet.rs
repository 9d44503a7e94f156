// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sprite sheet — the decoded source image, normalised to RGB8, plus the
// bounds-checked crop used to cut portraits out of it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader, RgbImage};
use spritecut_core::error::{Result, SpritecutError};
use spritecut_core::types::{CropRect, NamedRect};
use tracing::{debug, info, instrument, warn};

/// A decoded sprite sheet held as 3-channel RGB.
///
/// Any alpha channel or palette in the source is dropped on load, so every
/// crop shares the same pixel layout regardless of input format.
pub struct SpriteSheet {
    image: RgbImage,
}

impl SpriteSheet {
    // -- Construction ---------------------------------------------------------

    /// Load a sprite sheet from a file path.
    ///
    /// The decoder is chosen from the file contents when the extension is
    /// missing or wrong. A missing file is reported as
    /// [`SpritecutError::SourceNotFound`]; any other read or decode failure
    /// as [`SpritecutError::Decode`].
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = load_dynamic_image(path).map_err(|err| match err {
            ImageError::IoError(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                SpritecutError::SourceNotFound(path.to_path_buf())
            }
            other => SpritecutError::Decode {
                path: path.to_path_buf(),
                detail: other.to_string(),
            },
        })?;
        let sheet = Self::from_dynamic(img);
        info!(
            width = sheet.width(),
            height = sheet.height(),
            "Sprite sheet loaded"
        );
        Ok(sheet)
    }

    /// Decode a sprite sheet from raw encoded bytes (JPEG, PNG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| SpritecutError::Decode {
            path: "<memory>".into(),
            detail: err.to_string(),
        })?;
        let sheet = Self::from_dynamic(img);
        debug!(
            width = sheet.width(),
            height = sheet.height(),
            "Sprite sheet decoded from bytes"
        );
        Ok(sheet)
    }

    /// Wrap an already-decoded image, converting it to RGB8.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgb8(),
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    // -- Cropping -------------------------------------------------------------

    /// Check that `region` is non-empty and lies entirely inside the sheet.
    ///
    /// Regions are never clipped or padded: anything that does not fit is an
    /// [`SpritecutError::OutOfBounds`].
    pub fn check_bounds(&self, region: &NamedRect) -> Result<()> {
        let (width, height) = self.dimensions();
        if region.rect.is_empty() || !region.rect.fits_within(width, height) {
            return Err(SpritecutError::OutOfBounds {
                name: region.name.clone(),
                rect: region.rect,
                image_width: width,
                image_height: height,
            });
        }
        Ok(())
    }

    /// Copy out the pixels of `region`, `[x, x + w) x [y, y + h)`.
    #[instrument(skip(self, region), fields(name = %region.name, rect = %region.rect))]
    pub fn crop(&self, region: &NamedRect) -> Result<RgbImage> {
        self.check_bounds(region)?;
        let CropRect {
            x,
            y,
            width,
            height,
        } = region.rect;
        let cropped = image::imageops::crop_imm(&self.image, x, y, width, height).to_image();
        debug!(
            width = cropped.width(),
            height = cropped.height(),
            "Region cropped"
        );
        Ok(cropped)
    }
}

fn load_dynamic_image(path: &Path) -> std::result::Result<DynamicImage, ImageError> {
    match image::open(path) {
        Ok(img) => Ok(img),
        Err(err) if should_retry(&err) => {
            warn!(
                "Decode by extension failed for {} ({err}). Retrying with format sniffing.",
                path.display()
            );
            decode_with_guessed_format(path)
        }
        Err(err) => Err(err),
    }
}

fn should_retry(err: &ImageError) -> bool {
    matches!(err, ImageError::Decoding(_) | ImageError::Unsupported(_))
}

fn decode_with_guessed_format(path: &Path) -> std::result::Result<DynamicImage, ImageError> {
    let reader = BufReader::new(File::open(path)?);
    ImageReader::new(reader).with_guessed_format()?.decode()
}
