//! beepsheet core
//!
//! This crate implements the batch pipeline behind beepsheet: it takes a CSV
//! describing named audio clips and their durations, validates and normalizes
//! the rows, and synthesizes one placeholder tone ("beep") WAV file per row.
//!
//! # Overview
//!
//! The pipeline has two real stages, run strictly in sequence:
//!
//! - **Validation** ([`validate_rows`]) - consumes raw CSV rows and produces a
//!   cleaned, deduplicated, typed record list, or the first error found with
//!   its 1-based row number.
//! - **Synthesis** ([`synth`]) - turns each record into a fixed-format mono
//!   8-bit WAV at 100 Hz sample rate.
//!
//! Everything is all-or-nothing per batch: a validation error anywhere
//! discards the whole batch and no files are written.
//!
//! # Determinism
//!
//! Synthesis uses no randomness and no external state. Given the same
//! (name, duration) pair the output file is byte-identical across runs. Each
//! [`BeepResult`](synth::BeepResult) carries a BLAKE3 hash of the raw sample
//! bytes so callers can assert this cheaply.
//!
//! # Example
//!
//! ```
//! use beepsheet_core::batch::{run_batch, BatchOptions};
//!
//! let csv = "Name,Duration\nkick,1\nsnare.wav,2\n";
//! let dir = tempfile::tempdir().unwrap();
//! let files = run_batch(csv, dir.path(), &BatchOptions::default()).unwrap();
//! assert_eq!(files.len(), 2);
//! ```
//!
//! # Crate structure
//!
//! - [`csv`] - minimal CSV reader (header + rows, RFC 4180 quoting)
//! - [`validate`] - row validation and name/duration normalization
//! - [`synth`] - deterministic beep sample generation
//! - [`wav`] - WAV container writer (mono, 8-bit unsigned PCM)
//! - [`batch`] - orchestration: CSV text in, WAV files out
//! - [`archive`] - tar.gz packaging of a finished output directory

pub mod archive;
pub mod batch;
pub mod csv;
pub mod synth;
pub mod validate;
pub mod wav;

// Re-export main types at crate root
pub use batch::{run_batch, BatchError, BatchOptions};
pub use csv::{CsvError, CsvTable, RawRow};
pub use synth::{beep_samples, render_beep, BeepResult, SAMPLE_RATE_HZ, TONE_FREQUENCY_HZ};
pub use validate::{validate_rows, BeepRecord, ValidationError, WAV_EXTENSION};

#[cfg(test)]
mod integration_tests {
    use super::batch::{run_batch, BatchError, BatchOptions};
    use super::validate::ValidationError;
    use super::synth::SAMPLE_RATE_HZ;

    fn read_wav_sample_count(path: &std::path::Path) -> usize {
        let bytes = std::fs::read(path).unwrap();
        // 8-bit mono: data chunk payload length == sample count
        let data_len = u32::from_le_bytes(bytes[40..44].try_into().unwrap());
        assert_eq!(bytes.len(), 44 + data_len as usize);
        data_len as usize
    }

    #[test]
    fn test_end_to_end_success() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "Name,Duration\na,1\nb.wav,2\n";

        let files = run_batch(csv, dir.path(), &BatchOptions::default()).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name().unwrap(), "a.wav");
        assert_eq!(files[1].file_name().unwrap(), "b.wav");
        assert_eq!(read_wav_sample_count(&files[0]), SAMPLE_RATE_HZ as usize);
        assert_eq!(read_wav_sample_count(&files[1]), 2 * SAMPLE_RATE_HZ as usize);
    }

    #[test]
    fn test_end_to_end_duplicate_aborts_whole_batch() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "Name,Duration\na,1\na,2\n";

        let err = run_batch(csv, dir.path(), &BatchOptions::default()).unwrap_err();

        match err {
            BatchError::Validation(ValidationError::DuplicateName { row, name }) => {
                assert_eq!(row, 3);
                assert_eq!(name, "a.wav");
            }
            other => panic!("expected duplicate-name error, got {other:?}"),
        }
        // All-or-nothing: no file for the valid first row either
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_end_to_end_missing_column_produces_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "Name,Length\na,1\n";

        let err = run_batch(csv, dir.path(), &BatchOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            BatchError::Validation(ValidationError::MissingColumn { .. })
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_traversal_name_writes_nothing_outside_out_dir() {
        let parent = tempfile::tempdir().unwrap();
        let out = parent.path().join("out");
        std::fs::create_dir(&out).unwrap();

        let err = run_batch(
            "Name,Duration\n../escape,1\n",
            &out,
            &BatchOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            BatchError::Validation(ValidationError::InvalidName { .. })
        ));
        assert!(!parent.path().join("escape.wav").exists());
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_batch_then_archive_roundtrip_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "Name,Duration\nbeep,0.5\n";
        run_batch(csv, dir.path(), &BatchOptions::default()).unwrap();

        let a = super::archive::pack_dir_to_vec(dir.path()).unwrap();
        let b = super::archive::pack_dir_to_vec(dir.path()).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }
}
