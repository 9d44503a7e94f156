// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Spritecut — Core types, crop layout, and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod layout;
pub mod types;

pub use config::{CropConfig, GridFractions};
pub use error::SpritecutError;
pub use layout::build_crop_table;
pub use types::*;
