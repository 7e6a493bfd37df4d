//! Record file formats

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialization format of a vehicle record file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    Xml,
    Json,
    Toml,
}

impl RecordFormat {
    /// Infer the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordFormat::Xml => "xml",
            RecordFormat::Json => "json",
            RecordFormat::Toml => "toml",
        }
    }
}

impl std::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RecordFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(RecordFormat::Xml),
            "json" => Ok(RecordFormat::Json),
            "toml" => Ok(RecordFormat::Toml),
            other => Err(format!(
                "Unknown record format: {}. Valid: xml, json, toml",
                other
            )),
        }
    }
}
