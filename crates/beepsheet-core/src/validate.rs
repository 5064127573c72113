//! Row validation and normalization.
//!
//! Turns raw CSV rows into a list of [`BeepRecord`]s ready for synthesis, or
//! fails on the first problem found. Processing is strictly sequential over
//! input rows and all-or-nothing: the first error of any kind halts the pass
//! and no partial record list is returned.

use std::collections::HashSet;

use thiserror::Error;

use crate::csv::CsvTable;

/// File suffix every normalized clip name ends with.
pub const WAV_EXTENSION: &str = ".wav";

/// A validated (name, duration) pair ready for synthesis.
///
/// `name` is trimmed, suffixed with [`WAV_EXTENSION`], free of path
/// separators, and unique within its batch (case-sensitive,
/// post-normalization).
#[derive(Debug, Clone, PartialEq)]
pub struct BeepRecord {
    /// Output file name, ending with `.wav`.
    pub name: String,
    /// Clip duration in seconds. Finite and non-negative.
    pub duration_seconds: f64,
}

/// Errors that abort a validation pass.
///
/// All variants are fatal to the whole batch and user-correctable by editing
/// the source CSV. Row numbers are 1-based counting the header as row 1.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required column is absent from the row's field set.
    #[error("a column named '{column}' does not exist in the CSV header")]
    MissingColumn {
        /// The missing column name.
        column: String,
    },

    /// A normalized name collides with one already accepted in this batch.
    #[error("row {row} has a duplicate file name '{name}'")]
    DuplicateName {
        /// Row number of the second occurrence.
        row: usize,
        /// The colliding normalized name.
        name: String,
    },

    /// The duration field cannot be parsed as a finite number.
    #[error("row {row} has an invalid duration value '{value}'")]
    InvalidDuration {
        /// Row number of the offending row.
        row: usize,
        /// The raw field value as it appeared in the CSV.
        value: String,
    },

    /// The duration parsed but is negative.
    #[error("row {row} has a negative duration {value}")]
    NegativeDuration {
        /// Row number of the offending row.
        row: usize,
        /// The parsed negative duration.
        value: f64,
    },

    /// The normalized name contains a path separator and would resolve
    /// outside the output directory.
    #[error("row {row} has a file name '{name}' containing a path separator")]
    InvalidName {
        /// Row number of the offending row.
        row: usize,
        /// The offending normalized name.
        name: String,
    },
}

impl ValidationError {
    /// Returns the stable error code string (e.g., "V001").
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingColumn { .. } => "V001",
            ValidationError::DuplicateName { .. } => "V002",
            ValidationError::InvalidDuration { .. } => "V003",
            ValidationError::NegativeDuration { .. } => "V004",
            ValidationError::InvalidName { .. } => "V005",
        }
    }

    /// Returns the 1-based row number the error points at, when row-scoped.
    pub fn row(&self) -> Option<usize> {
        match self {
            ValidationError::MissingColumn { .. } => None,
            ValidationError::DuplicateName { row, .. }
            | ValidationError::InvalidDuration { row, .. }
            | ValidationError::NegativeDuration { row, .. }
            | ValidationError::InvalidName { row, .. } => Some(*row),
        }
    }
}

/// Normalizes a raw clip name: trims surrounding whitespace and appends
/// [`WAV_EXTENSION`] unless already present. Idempotent.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with(WAV_EXTENSION) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{WAV_EXTENSION}")
    }
}

/// Parses a duration field as a finite f64. Whitespace is tolerated around
/// the number; `inf`/`NaN` spellings are rejected along with garbage.
fn parse_duration(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|d| d.is_finite())
}

/// Validates and normalizes every data row of `table`.
///
/// Returns one [`BeepRecord`] per input row, in input order, or the first
/// error encountered. Column presence is re-checked on every row to preserve
/// the abort-point semantics of the row-by-row loop: a bad header fails on
/// the very first data row scanned, before any row is fully processed.
pub fn validate_rows(
    table: &CsvTable,
    name_column: &str,
    duration_column: &str,
) -> Result<Vec<BeepRecord>, ValidationError> {
    let mut records = Vec::with_capacity(table.len());
    let mut seen_names: HashSet<String> = HashSet::new();

    for row in table.rows() {
        let raw_name = row
            .get(name_column)
            .ok_or_else(|| ValidationError::MissingColumn {
                column: name_column.to_string(),
            })?;
        let raw_duration =
            row.get(duration_column)
                .ok_or_else(|| ValidationError::MissingColumn {
                    column: duration_column.to_string(),
                })?;

        let name = normalize_name(raw_name);
        // Names become file paths via out_dir.join(name); a separator would
        // let a row write outside the output directory.
        if name.contains('/') || name.contains('\\') {
            return Err(ValidationError::InvalidName {
                row: row.number(),
                name,
            });
        }
        if !seen_names.insert(name.clone()) {
            return Err(ValidationError::DuplicateName {
                row: row.number(),
                name,
            });
        }

        let duration_seconds =
            parse_duration(raw_duration).ok_or_else(|| ValidationError::InvalidDuration {
                row: row.number(),
                value: raw_duration.to_string(),
            })?;
        if duration_seconds < 0.0 {
            return Err(ValidationError::NegativeDuration {
                row: row.number(),
                value: duration_seconds,
            });
        }

        records.push(BeepRecord {
            name,
            duration_seconds,
        });
    }

    Ok(records)
}
