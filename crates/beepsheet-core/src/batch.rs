//! Batch orchestration: CSV text in, beep WAV files out.
//!
//! A batch is the full set of rows from one submitted CSV, processed
//! atomically. Validation runs to completion before any file is written, so
//! a validation failure yields zero output files. A synthesis I/O error
//! aborts the remaining batch; the caller is responsible for discarding the
//! (now incomplete) output directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::csv::{CsvError, CsvTable};
use crate::synth::render_beep;
use crate::validate::{validate_rows, BeepRecord, ValidationError};

/// Default name of the clip-name column.
pub const DEFAULT_NAME_COLUMN: &str = "Name";

/// Default name of the duration column.
pub const DEFAULT_DURATION_COLUMN: &str = "Duration";

/// Per-batch options: which columns carry the clip name and duration.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Column holding the output file name.
    pub name_column: String,
    /// Column holding the duration in seconds.
    pub duration_column: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            duration_column: DEFAULT_DURATION_COLUMN.to_string(),
        }
    }
}

/// Errors that abort a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The CSV text could not be read at all.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// A row failed validation; the message carries the row number.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Writing an output file failed. Environment-level, not correctable by
    /// editing the CSV.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parses and validates CSV text without writing anything.
pub fn plan_batch(csv_text: &str, options: &BatchOptions) -> Result<Vec<BeepRecord>, BatchError> {
    let table = CsvTable::parse(csv_text)?;
    let records = validate_rows(&table, &options.name_column, &options.duration_column)?;
    Ok(records)
}

/// Writes one beep WAV per record into `out_dir`, named exactly as the
/// record's normalized name. Returns the written paths in record order.
pub fn write_beeps(out_dir: &Path, records: &[BeepRecord]) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(records.len());
    for record in records {
        let path = out_dir.join(&record.name);
        let beep = render_beep(record.duration_seconds);
        fs::write(&path, &beep.wav_data)?;
        paths.push(path);
    }
    Ok(paths)
}

/// Runs a full batch: parse, validate, synthesize.
///
/// `out_dir` must already exist and be writable. On success returns the
/// written file paths in input-row order; on any error, no guarantee is made
/// about partially written files beyond "validation errors write nothing".
pub fn run_batch(
    csv_text: &str,
    out_dir: &Path,
    options: &BatchOptions,
) -> Result<Vec<PathBuf>, BatchError> {
    let records = plan_batch(csv_text, options)?;
    let paths = write_beeps(out_dir, &records)?;
    Ok(paths)
}
