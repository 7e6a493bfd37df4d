//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::record::RecordFormat;
use diagnostics_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use diagnostics_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("input.path cannot be empty")]
    EmptyInputPath,
}

/// Raw input configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInputConfig {
    /// Record file to diagnose when none is given on the command line
    pub path: Option<PathBuf>,
    /// Record format; inferred from the file extension when unset
    pub format: Option<RecordFormat>,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// How stage progress is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileProgressStyle {
    /// One line per step
    #[default]
    Simple,
    /// Progress bar across the steps
    Bar,
}

/// Raw progress configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProgressConfig {
    /// Show progress while diagnosing
    pub show_progress: bool,
    pub style: FileProgressStyle,
}

impl Default for FileProgressConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            style: FileProgressStyle::default(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Input settings
    pub input: FileInputConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Progress settings
    pub progress: FileProgressConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(path) = &self.input.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigValidationError::EmptyInputPath);
            }
        }

        Ok(())
    }
}
