//! Presentation layer for car-diagnostics
//!
//! This crate contains the CLI definition, output formatters
//! and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, InputFormat, OutputFormat};
pub use config::{OutputConfig, ProgressStyle};
pub use output::console::ConsoleFormatter;
pub use output::formatter::ReportFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
