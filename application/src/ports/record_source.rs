//! Vehicle record source port
//!
//! Defines how the application obtains the record to diagnose.

use diagnostics_domain::VehicleRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or decoding a vehicle record
#[derive(Error, Debug)]
pub enum RecordSourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("Unsupported record format: {0}")]
    UnsupportedFormat(String),
}

/// Supplies the vehicle record to diagnose
///
/// `Ok(None)` means the source was readable but held no record.
pub trait VehicleRecordSource {
    fn load(&self) -> Result<Option<VehicleRecord>, RecordSourceError>;

    /// Human-readable origin of the record, for log messages
    fn describe(&self) -> String {
        "vehicle record".to_string()
    }
}

/// A source holding a record already in memory
pub struct InMemoryRecordSource {
    record: Option<VehicleRecord>,
}

impl InMemoryRecordSource {
    pub fn new(record: VehicleRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    pub fn empty() -> Self {
        Self { record: None }
    }
}

impl VehicleRecordSource for InMemoryRecordSource {
    fn load(&self) -> Result<Option<VehicleRecord>, RecordSourceError> {
        Ok(self.record.clone())
    }

    fn describe(&self) -> String {
        "in-memory record".to_string()
    }
}
