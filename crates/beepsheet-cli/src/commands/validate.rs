//! Validate command implementation.
//!
//! Validates a beep sheet CSV without writing any files.

use anyhow::{Context, Result};
use beepsheet_core::batch::{plan_batch, BatchOptions};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{batch_error_to_json, records_to_json, ValidateOutput};

/// Run the validate command.
///
/// # Arguments
/// * `input` - Path to the CSV file
/// * `name_column` - Column holding the clip name
/// * `duration_column` - Column holding the duration in seconds
/// * `json_output` - Whether to emit a machine-readable JSON envelope
///
/// # Returns
/// Exit code: 0 if the sheet is valid, 1 if not.
pub fn run(
    input: &str,
    name_column: &str,
    duration_column: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let csv_text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read CSV file: {input}"))?;
    let options = BatchOptions {
        name_column: name_column.to_string(),
        duration_column: duration_column.to_string(),
    };

    let result = plan_batch(&csv_text, &options);

    if json_output {
        let output = match &result {
            Ok(records) => ValidateOutput {
                success: true,
                records: Some(records_to_json(records)),
                error: None,
            },
            Err(e) => ValidateOutput {
                success: false,
                records: None,
                error: Some(batch_error_to_json(e)),
            },
        };
        let json = serde_json::to_string_pretty(&output)
            .expect("ValidateOutput serialization should not fail");
        println!("{json}");
        return Ok(match result {
            Ok(_) => ExitCode::SUCCESS,
            Err(_) => ExitCode::from(1),
        });
    }

    println!("{} {}", "Validating:".cyan().bold(), input);

    match result {
        Ok(records) => {
            for record in &records {
                println!(
                    "  {} {} ({}s)",
                    "+".green(),
                    record.name,
                    record.duration_seconds
                );
            }
            println!(
                "\n{} {} record(s) valid",
                "SUCCESS".green().bold(),
                records.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let json = batch_error_to_json(&e);
            println!("  {} [{}]: {}", "x".red(), json.code.red(), json.message);
            println!("\n{} Sheet is not valid", "FAILED".red().bold());
            Ok(ExitCode::from(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &tempfile::TempDir, contents: &str) -> String {
        let path = dir.path().join("sheet.csv");
        std::fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    // ExitCode has no PartialEq; compare through Debug
    fn assert_exit(actual: ExitCode, expected: ExitCode) {
        assert_eq!(format!("{actual:?}"), format!("{expected:?}"));
    }

    #[test]
    fn validate_accepts_valid_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_csv(&tmp, "Name,Duration\na,1\nb.wav,2\n");
        let code = run(&path, "Name", "Duration", false).unwrap();
        assert_exit(code, ExitCode::SUCCESS);
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_csv(&tmp, "Name,Duration\na,1\na,2\n");
        let code = run(&path, "Name", "Duration", false).unwrap();
        assert_exit(code, ExitCode::from(1));
    }

    #[test]
    fn validate_json_output_success() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_csv(&tmp, "Name,Duration\na,1\n");
        let code = run(&path, "Name", "Duration", true).unwrap();
        assert_exit(code, ExitCode::SUCCESS);
    }

    #[test]
    fn validate_errors_on_missing_file() {
        let err = run("/nonexistent/sheet.csv", "Name", "Duration", false).unwrap_err();
        assert!(err.to_string().contains("Failed to read CSV file"));
    }

    #[test]
    fn validate_honors_custom_columns() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_csv(&tmp, "file,secs\na,1\n");
        let code = run(&path, "file", "secs", false).unwrap();
        assert_exit(code, ExitCode::SUCCESS);
    }
}
