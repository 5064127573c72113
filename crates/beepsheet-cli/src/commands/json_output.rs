//! Machine-readable JSON envelopes for `--json` output.

use beepsheet_core::batch::BatchError;
use beepsheet_core::validate::BeepRecord;
use serde::Serialize;

/// A single error in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonError {
    /// Stable error code ("V001".."V005", "CSV", "IO").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// 1-based row number when the error is row-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
}

/// One validated record in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonRecord {
    pub name: String,
    pub duration_seconds: f64,
}

/// Envelope for the `validate` command.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<JsonRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// One written file in `generate` JSON output.
#[derive(Debug, Serialize)]
pub struct JsonFile {
    pub name: String,
    pub num_samples: usize,
    pub pcm_hash: String,
}

/// Envelope for the `generate` command.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    pub files: Vec<JsonFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Converts a batch error into its JSON form.
pub fn batch_error_to_json(err: &BatchError) -> JsonError {
    match err {
        BatchError::Validation(v) => JsonError {
            code: v.code().to_string(),
            message: v.to_string(),
            row: v.row(),
        },
        BatchError::Csv(c) => JsonError {
            code: "CSV".to_string(),
            message: c.to_string(),
            row: None,
        },
        BatchError::Io(e) => JsonError {
            code: "IO".to_string(),
            message: e.to_string(),
            row: None,
        },
    }
}

/// Converts validated records into their JSON form.
pub fn records_to_json(records: &[BeepRecord]) -> Vec<JsonRecord> {
    records
        .iter()
        .map(|r| JsonRecord {
            name: r.name.clone(),
            duration_seconds: r.duration_seconds,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use beepsheet_core::validate::ValidationError;

    #[test]
    fn test_validation_error_json_carries_code_and_row() {
        let err = BatchError::Validation(ValidationError::DuplicateName {
            row: 3,
            name: "a.wav".to_string(),
        });
        let json = batch_error_to_json(&err);
        assert_eq!(json.code, "V002");
        assert_eq!(json.row, Some(3));
        assert!(json.message.contains("a.wav"));
    }

    #[test]
    fn test_row_omitted_when_absent() {
        let err = BatchError::Validation(ValidationError::MissingColumn {
            column: "Name".to_string(),
        });
        let json = batch_error_to_json(&err);
        let text = serde_json::to_string(&json).unwrap();
        assert!(!text.contains("\"row\""));
    }
}
