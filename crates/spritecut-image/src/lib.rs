// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// spritecut-image — Image side of Spritecut.
//
// Loads the sprite sheet as 3-channel RGB, crops the portrait regions with an
// explicit bounds check, and writes each one out as PNG.

pub mod export;
pub mod extract;
pub mod sheet;

pub use export::{encode_png, save_png};
pub use extract::{Progress, extract_avatars};
pub use sheet::SpriteSheet;
