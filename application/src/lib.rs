//! Application layer for car-diagnostics
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress::{DiagnosticProgressNotifier, NoProgress},
    record_source::{InMemoryRecordSource, RecordSourceError, VehicleRecordSource},
};
pub use use_cases::run_diagnostics::{DiagnosticReport, RunDiagnosticsError, RunDiagnosticsUseCase};
