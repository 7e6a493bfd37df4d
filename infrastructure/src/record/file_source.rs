//! File-backed vehicle record source

use super::format::RecordFormat;
use super::xml_document::parse_car_xml;
use diagnostics_application::{RecordSourceError, VehicleRecordSource};
use diagnostics_domain::VehicleRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a vehicle record from an XML, JSON or TOML file
///
/// A file that is empty (or whitespace only) holds no record. A JSON file
/// containing `null` holds no record either.
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
    format: RecordFormat,
}

impl FileRecordSource {
    /// Create a source whose format is inferred from the file extension
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, RecordSourceError> {
        let path = path.into();
        let format = RecordFormat::from_path(&path).ok_or_else(|| {
            RecordSourceError::UnsupportedFormat(format!(
                "cannot infer format of {} (expected .xml, .json or .toml)",
                path.display()
            ))
        })?;
        Ok(Self { path, format })
    }

    /// Create a source with an explicit format
    pub fn with_format(path: impl Into<PathBuf>, format: RecordFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    fn decode(&self, content: &str) -> Result<Option<VehicleRecord>, RecordSourceError> {
        let decode_error = |message: String| RecordSourceError::Decode {
            path: self.path.clone(),
            message,
        };

        match self.format {
            RecordFormat::Xml => parse_car_xml(content)
                .map(Some)
                .map_err(|e| decode_error(e.to_string())),
            RecordFormat::Json => serde_json::from_str::<Option<VehicleRecord>>(content)
                .map_err(|e| decode_error(e.to_string())),
            RecordFormat::Toml => toml::from_str::<VehicleRecord>(content)
                .map(Some)
                .map_err(|e| decode_error(e.to_string())),
        }
    }
}

impl VehicleRecordSource for FileRecordSource {
    fn load(&self) -> Result<Option<VehicleRecord>, RecordSourceError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| RecordSourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        if content.trim().is_empty() {
            debug!("{} is empty", self.path.display());
            return Ok(None);
        }

        let record = self.decode(&content)?;
        if let Some(record) = &record {
            debug!(
                "Decoded {} record with {} part(s)",
                self.format,
                record.inventory().len()
            );
        }
        Ok(record)
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.path.display(), self.format)
    }
}
