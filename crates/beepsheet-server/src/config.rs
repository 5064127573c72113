//! Server configuration.
//!
//! Upload limits, allowed extensions, and column names are injected into the
//! application state at startup instead of living in module-level globals.
//! Values come from an optional TOML file; anything absent falls back to the
//! defaults below.

use anyhow::{Context, Result};
use beepsheet_core::batch::{BatchOptions, DEFAULT_DURATION_COLUMN, DEFAULT_NAME_COLUMN};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Configuration for the upload front.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
    /// Lower-cased file extensions accepted for upload.
    pub allowed_extensions: Vec<String>,
    /// CSV column holding the clip name.
    pub name_column: String,
    /// CSV column holding the duration in seconds.
    pub duration_column: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5850".to_string(),
            max_upload_bytes: 1024 * 1024,
            allowed_extensions: vec!["csv".to_string()],
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            duration_column: DEFAULT_DURATION_COLUMN.to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file, or the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                let config: Self = toml::from_str(&text)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?;
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Returns true when the uploaded file name carries an allowed
    /// extension. Extension matching is case-insensitive.
    pub fn is_allowed_filename(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => {
                let ext = ext.to_ascii_lowercase();
                self.allowed_extensions.iter().any(|a| a == &ext)
            }
            None => false,
        }
    }

    /// Batch options derived from the configured column names.
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            name_column: self.name_column.clone(),
            duration_column: self.duration_column.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.allowed_extensions, vec!["csv"]);
        assert_eq!(config.name_column, "Name");
        assert_eq!(config.duration_column, "Duration");
    }

    #[test]
    fn test_allowed_filename() {
        let config = ServerConfig::default();
        assert!(config.is_allowed_filename("sheet.csv"));
        assert!(config.is_allowed_filename("SHEET.CSV"));
        assert!(config.is_allowed_filename("a.b.csv"));
        assert!(!config.is_allowed_filename("sheet.txt"));
        assert!(!config.is_allowed_filename("csv"));
        assert!(!config.is_allowed_filename(""));
    }

    #[test]
    fn test_load_partial_toml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beepsheet.toml");
        std::fs::write(&path, "max_upload_bytes = 4096\n").unwrap();

        let config = ServerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.max_upload_bytes, 4096);
        assert_eq!(config.bind_addr, "127.0.0.1:5850");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = ServerConfig::load(Some(Path::new("/nonexistent/beepsheet.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
