//! beepsheet CLI - generate placeholder beep WAVs from a CSV sheet
//!
//! This binary provides commands for validating beep sheets and generating
//! their WAV batches.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use beepsheet_cli::commands;

/// beepsheet - CSV-driven placeholder beep generation
#[derive(Parser)]
#[command(name = "beepsheet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a beep sheet CSV without generating files
    Validate {
        /// Path to the CSV file
        #[arg(short, long)]
        input: String,

        /// Column holding the clip name
        #[arg(long, default_value = "Name")]
        name_column: String,

        /// Column holding the duration in seconds
        #[arg(long, default_value = "Duration")]
        duration_column: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate beep WAV files from a beep sheet CSV
    Generate {
        /// Path to the CSV file
        #[arg(short, long)]
        input: String,

        /// Output directory for WAV files (created if missing)
        #[arg(short, long, default_value = "beeps")]
        out_dir: String,

        /// Also pack the output directory into a tar.gz at this path
        #[arg(long)]
        archive: Option<String>,

        /// Column holding the clip name
        #[arg(long, default_value = "Name")]
        name_column: String,

        /// Column holding the duration in seconds
        #[arg(long, default_value = "Duration")]
        duration_column: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            input,
            name_column,
            duration_column,
            json,
        } => commands::validate::run(&input, &name_column, &duration_column, json),
        Commands::Generate {
            input,
            out_dir,
            archive,
            name_column,
            duration_column,
            json,
        } => commands::generate::run(
            &input,
            &out_dir,
            archive.as_deref(),
            &name_column,
            &duration_column,
            json,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
