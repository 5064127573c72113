//! Generate command implementation.
//!
//! Validates a beep sheet CSV, writes one beep WAV per row, and optionally
//! packs the output directory into a tar.gz archive.

use anyhow::{Context, Result};
use beepsheet_core::archive::pack_dir;
use beepsheet_core::batch::{plan_batch, BatchOptions};
use beepsheet_core::synth::render_beep;
use colored::Colorize;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{batch_error_to_json, GenerateOutput, JsonFile};

/// Run the generate command.
///
/// # Arguments
/// * `input` - Path to the CSV file
/// * `out_dir` - Directory to write WAV files into (created if missing)
/// * `archive` - Optional path for a tar.gz of the output directory
/// * `name_column` / `duration_column` - Required CSV columns
/// * `json_output` - Whether to emit a machine-readable JSON envelope
///
/// # Returns
/// Exit code: 0 on success, 1 on validation failure.
pub fn run(
    input: &str,
    out_dir: &str,
    archive: Option<&str>,
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

    let records = match plan_batch(&csv_text, &options) {
        Ok(records) => records,
        Err(e) => {
            let json = batch_error_to_json(&e);
            if json_output {
                let output = GenerateOutput {
                    success: false,
                    out_dir: None,
                    files: Vec::new(),
                    archive: None,
                    error: Some(json),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("GenerateOutput serialization should not fail")
                );
            } else {
                println!("{} {}", "Validating:".cyan().bold(), input);
                println!("  {} [{}]: {}", "x".red(), json.code.red(), json.message);
                println!("\n{} No files were generated", "FAILED".red().bold());
            }
            return Ok(ExitCode::from(1));
        }
    };

    let out_path = Path::new(out_dir);
    std::fs::create_dir_all(out_path)
        .with_context(|| format!("Failed to create output directory: {out_dir}"))?;

    if !json_output {
        println!("{} {}", "Generating:".cyan().bold(), input);
    }

    let mut files = Vec::with_capacity(records.len());
    for record in &records {
        let beep = render_beep(record.duration_seconds);
        let path = out_path.join(&record.name);
        std::fs::write(&path, &beep.wav_data)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if !json_output {
            println!(
                "  {} {} ({} samples)",
                "+".green(),
                record.name,
                beep.num_samples
            );
        }
        files.push(JsonFile {
            name: record.name.clone(),
            num_samples: beep.num_samples,
            pcm_hash: beep.pcm_hash,
        });
    }

    if let Some(archive_path) = archive {
        let file = File::create(archive_path)
            .with_context(|| format!("Failed to create archive: {archive_path}"))?;
        pack_dir(out_path, file)
            .with_context(|| format!("Failed to pack archive: {archive_path}"))?;
        if !json_output {
            println!("  {} {}", "=".dimmed(), archive_path);
        }
    }

    if json_output {
        let output = GenerateOutput {
            success: true,
            out_dir: Some(out_dir.to_string()),
            files,
            archive: archive.map(|s| s.to_string()),
            error: None,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output)
                .expect("GenerateOutput serialization should not fail")
        );
    } else {
        println!(
            "\n{} {} file(s) written to {}",
            "SUCCESS".green().bold(),
            records.len(),
            out_dir
        );
    }

    Ok(ExitCode::SUCCESS)
}
