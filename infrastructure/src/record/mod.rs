//! Vehicle record sources
//!
//! Adapters implementing [`diagnostics_application::VehicleRecordSource`].

mod file_source;
mod format;
mod xml_document;

pub use file_source::FileRecordSource;
pub use format::RecordFormat;
