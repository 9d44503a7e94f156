// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Crop table builder — turns the sheet dimensions into the five named portrait
// regions of the 2x3 avatar grid (the bottom-right cell is unused).

use tracing::debug;

use crate::config::GridFractions;
use crate::types::{CropRect, CropTable, NamedRect};

#[derive(Debug, Clone, Copy)]
enum Column {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
enum Row {
    Top,
    Middle,
    Bottom,
}

/// Portrait slots in output order.
const SLOTS: [(&str, Column, Row); 5] = [
    ("avatar_er_hineda", Column::Left, Row::Top),
    ("avatar_er_coder", Column::Right, Row::Top),
    ("avatar_er_plan", Column::Left, Row::Middle),
    ("avatar_er_serve", Column::Right, Row::Middle),
    ("avatar_er_pr", Column::Left, Row::Bottom),
];

/// `fraction * dimension`, truncated toward zero.
///
/// The product is formed in `f64` so the result is bit-identical to the usual
/// double-precision `int(width * 0.43)` arithmetic. Never rounds.
pub fn scaled(dimension: u32, fraction: f64) -> u32 {
    (f64::from(dimension) * fraction) as u32
}

/// Build the ordered crop table for a sheet of `width` x `height` pixels.
///
/// Always succeeds. A zero dimension produces zero-sized regions; rejecting
/// them is left to the cropper.
pub fn build_crop_table(width: u32, height: u32, fractions: &GridFractions) -> CropTable {
    let box_width = scaled(width, fractions.box_width);
    let box_height = scaled(height, fractions.box_height);

    let column_x = |column: Column| match column {
        Column::Left => scaled(width, fractions.col1_x),
        Column::Right => scaled(width, fractions.col2_x),
    };
    let row_y = |row: Row| match row {
        Row::Top => scaled(height, fractions.row1_y),
        Row::Middle => scaled(height, fractions.row2_y),
        Row::Bottom => scaled(height, fractions.row3_y),
    };

    let entries = SLOTS
        .iter()
        .map(|&(name, column, row)| NamedRect {
            name: name.to_string(),
            rect: CropRect::new(column_x(column), row_y(row), box_width, box_height),
        })
        .collect();

    debug!(width, height, box_width, box_height, "Crop table built");
    CropTable::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(width: u32, height: u32) -> CropTable {
        build_crop_table(width, height, &GridFractions::default())
    }

    #[test]
    fn square_thousand_pixel_sheet() {
        let t = table(1000, 1000);
        assert_eq!(t.get("avatar_er_hineda"), Some(&CropRect::new(25, 80, 430, 250)));
        assert_eq!(t.get("avatar_er_coder"), Some(&CropRect::new(520, 80, 430, 250)));
        assert_eq!(t.get("avatar_er_plan"), Some(&CropRect::new(25, 370, 430, 250)));
        assert_eq!(t.get("avatar_er_serve"), Some(&CropRect::new(520, 370, 430, 250)));
        assert_eq!(t.get("avatar_er_pr"), Some(&CropRect::new(25, 660, 430, 250)));
    }

    #[test]
    fn portrait_sheet_1200_by_1800() {
        let t = table(1200, 1800);
        assert_eq!(t.get("avatar_er_hineda"), Some(&CropRect::new(30, 144, 516, 450)));
        assert_eq!(t.get("avatar_er_serve"), Some(&CropRect::new(624, 666, 516, 450)));
        assert_eq!(t.get("avatar_er_pr"), Some(&CropRect::new(30, 1188, 516, 450)));
    }

    #[test]
    fn fractional_products_truncate_instead_of_rounding() {
        // 640 * 0.43 = 275.2, 480 * 0.08 = 38.4, 480 * 0.37 = 177.6
        let t = table(640, 480);
        let plan = t.get("avatar_er_plan").copied().expect("plan slot");
        assert_eq!(plan.width, 275);
        assert_eq!(plan.y, 177);
        assert_eq!(t.get("avatar_er_hineda").map(|r| r.y), Some(38));
        assert_eq!(scaled(7, 0.52), 3);
    }

    #[test]
    fn order_matches_output_order() {
        let t = table(1000, 1000);
        assert_eq!(
            t.names().collect::<Vec<_>>(),
            [
                "avatar_er_hineda",
                "avatar_er_coder",
                "avatar_er_plan",
                "avatar_er_serve",
                "avatar_er_pr",
            ]
        );
    }

    #[test]
    fn zero_dimensions_yield_empty_regions() {
        let t = table(0, 0);
        assert_eq!(t.len(), 5);
        assert!(t.iter().all(|entry| entry.rect == CropRect::new(0, 0, 0, 0)));

        let t = table(1000, 0);
        assert!(t.iter().all(|entry| entry.rect.is_empty()));
    }

    #[test]
    fn default_layout_fits_inside_the_sheet() {
        for (w, h) in [(1000, 1000), (1200, 1800), (640, 480), (1, 1)] {
            let t = table(w, h);
            assert!(t.iter().all(|entry| entry.rect.fits_within(w, h)), "{w}x{h}");
        }
    }
}
