//! Infrastructure layer for car-diagnostics
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod record;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileInputConfig, FileOutputConfig,
    FileOutputFormat, FileProgressConfig, FileProgressStyle,
};
pub use record::{FileRecordSource, RecordFormat};
