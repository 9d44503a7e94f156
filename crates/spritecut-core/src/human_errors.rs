// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable diagnostics for the command line.
//
// Every failure is fatal, so each message names the failing stage and path and
// says what has to change before the run is attempted again.

use crate::error::SpritecutError;

/// A human-readable error with a plain message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Pipeline stage that failed (`load`, `crop`, `save`, `config`).
    pub stage: &'static str,
    /// One-line summary.
    pub message: String,
    /// What the user should fix.
    pub suggestion: String,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}\n  {}", self.stage, self.message, self.suggestion)
    }
}

/// Convert a `SpritecutError` into a `HumanError`.
pub fn humanize_error(err: &SpritecutError) -> HumanError {
    let stage = err.stage();
    match err {
        // -- Load --
        SpritecutError::SourceNotFound(path) => HumanError {
            stage,
            message: format!("The sprite sheet {} doesn't exist.", path.display()),
            suggestion: "Check the source path, or point source_path in a config file at the sheet."
                .into(),
        },

        SpritecutError::Decode { path, detail } => HumanError {
            stage,
            message: format!(
                "The sprite sheet {} couldn't be read as an image.",
                path.display()
            ),
            suggestion: format!("Make sure the file is a complete JPEG or PNG. ({detail})"),
        },

        // -- Crop --
        SpritecutError::OutOfBounds {
            name,
            rect,
            image_width,
            image_height,
        } => {
            let suggestion = if rect.is_empty() {
                "The sheet is too small to hold a portrait. Use the full-size sheet.".into()
            } else {
                "Use a sheet with the standard 2x3 portrait grid, or adjust the config fractions."
                    .into()
            };
            HumanError {
                stage,
                message: format!(
                    "Portrait {name} at {rect} falls outside the {}x{} sheet.",
                    image_width,
                    image_height
                ),
                suggestion,
            }
        }

        // -- Save --
        SpritecutError::Write { path, detail } => HumanError {
            stage,
            message: format!("Couldn't write {}.", path.display()),
            suggestion: format!(
                "Check that the output directory is writable and the disk isn't full. ({detail})"
            ),
        },

        // -- Configuration --
        SpritecutError::Config(detail) => HumanError {
            stage,
            message: "The config file has an invalid value.".into(),
            suggestion: detail.clone(),
        },

        SpritecutError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    stage,
                    message: "The config file couldn't be found.".into(),
                    suggestion: "Check the path given on the command line.".into(),
                }
            } else {
                HumanError {
                    stage,
                    message: "The config file couldn't be read.".into(),
                    suggestion: format!("Check the file's permissions. ({io_err})"),
                }
            }
        }

        SpritecutError::Serialization(json_err) => HumanError {
            stage,
            message: "The config file isn't valid JSON.".into(),
            suggestion: format!(
                "Fix the syntax error at line {}, column {}.",
                json_err.line(),
                json_err.column()
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CropRect;

    #[test]
    fn missing_source_names_the_path() {
        let err = SpritecutError::SourceNotFound("sheets/avatar-sheet.jpg".into());
        let human = humanize_error(&err);
        assert_eq!(human.stage, "load");
        assert!(human.message.contains("sheets/avatar-sheet.jpg"));
    }

    #[test]
    fn empty_region_suggests_full_size_sheet() {
        let err = SpritecutError::OutOfBounds {
            name: "avatar_er_hineda".into(),
            rect: CropRect::new(0, 0, 0, 0),
            image_width: 0,
            image_height: 0,
        };
        let human = humanize_error(&err);
        assert_eq!(human.stage, "crop");
        assert!(human.suggestion.contains("too small"));
    }

    #[test]
    fn write_failure_mentions_disk_and_permissions() {
        let err = SpritecutError::Write {
            path: "public/avatar_er_pr.png".into(),
            detail: "Permission denied".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.stage, "save");
        assert!(human.suggestion.contains("writable"));
        assert!(human.to_string().starts_with("[save] Couldn't write public/avatar_er_pr.png."));
    }

    #[test]
    fn bad_json_points_at_line_and_column() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let human = humanize_error(&SpritecutError::Serialization(json_err));
        assert_eq!(human.stage, "config");
        assert!(human.suggestion.starts_with("Fix the syntax error at line 2, column"));
    }

    #[test]
    fn out_of_bounds_message_names_portrait_and_sheet_size() {
        let err = SpritecutError::OutOfBounds {
            name: "avatar_er_pr".into(),
            rect: CropRect::new(25, 90, 43, 25),
            image_width: 100,
            image_height: 100,
        };
        let human = humanize_error(&err);
        assert_eq!(
            human.message,
            "Portrait avatar_er_pr at (25, 90) 43x25 falls outside the 100x100 sheet."
        );
        assert!(human.suggestion.contains("config fractions"));
    }

    #[test]
    fn missing_config_is_reported_as_config_stage() {
        let err = SpritecutError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        let human = humanize_error(&err);
        assert_eq!(human.stage, "config");
        assert!(human.message.contains("couldn't be found"));
    }
}
