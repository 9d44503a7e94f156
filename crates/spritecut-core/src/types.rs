// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: crop rectangles, the ordered crop table, and run results.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A rectangular region of the source image, in pixels.
///
/// Covers `[x, x + width) x [y, y + height)`. Nothing here guarantees the
/// region lies inside any particular image; see [`CropRect::fits_within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge. Widened so `x + width` cannot overflow.
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    /// True when the region covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when the region lies entirely inside an image of the given size.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.right() <= u64::from(image_width) && self.bottom() <= u64::from(image_height)
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// A crop rectangle paired with the output name it is saved under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRect {
    /// Output file stem, e.g. `avatar_er_hineda`.
    pub name: String,
    pub rect: CropRect,
}

/// Ordered table of named crop regions.
///
/// Built once from the source dimensions and never mutated afterwards.
/// Iteration order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CropTable {
    entries: Vec<NamedRect>,
}

impl CropTable {
    pub fn new(entries: Vec<NamedRect>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedRect> {
        self.entries.iter()
    }

    /// Look up a region by output name.
    pub fn get(&self, name: &str) -> Option<&CropRect> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.rect)
    }

    /// Output names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

impl<'a> IntoIterator for &'a CropTable {
    type Item = &'a NamedRect;
    type IntoIter = std::slice::Iter<'a, NamedRect>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One PNG written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCrop {
    pub name: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Lowercase hex SHA-256 of the encoded PNG bytes.
    pub sha256: String,
}

/// Summary of a complete extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub source_width: u32,
    pub source_height: u32,
    pub saved: Vec<SavedCrop>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_do_not_overflow() {
        let rect = CropRect::new(u32::MAX, u32::MAX, u32::MAX, 1);
        assert_eq!(rect.right(), 2 * u64::from(u32::MAX));
        assert!(!rect.fits_within(u32::MAX, u32::MAX));
    }

    #[test]
    fn fits_within_is_inclusive_of_far_edge() {
        let rect = CropRect::new(30, 144, 516, 450);
        assert!(rect.fits_within(546, 594));
        assert!(!rect.fits_within(545, 594));
        assert!(!rect.fits_within(546, 593));
    }

    #[test]
    fn zero_sized_rect_is_empty() {
        assert!(CropRect::new(0, 0, 0, 10).is_empty());
        assert!(CropRect::new(0, 0, 10, 0).is_empty());
        assert!(!CropRect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn table_keeps_insertion_order() {
        let table = CropTable::new(vec![
            NamedRect {
                name: "b".into(),
                rect: CropRect::new(0, 0, 1, 1),
            },
            NamedRect {
                name: "a".into(),
                rect: CropRect::new(1, 1, 1, 1),
            },
        ]);
        assert_eq!(table.names().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(table.get("a"), Some(&CropRect::new(1, 1, 1, 1)));
        assert_eq!(table.get("c"), None);
    }

    #[test]
    fn display_shows_origin_and_size() {
        assert_eq!(CropRect::new(30, 144, 516, 450).to_string(), "(30, 144) 516x450");
    }
}
