//! Presentation-level configuration
//!
//! Resolved settings for output formatting and progress display.

use diagnostics_domain::OutputFormat;

/// How stage progress is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressStyle {
    #[default]
    Simple,
    Bar,
}

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Print the banner and stage progress
    pub show_progress: bool,
    pub progress_style: ProgressStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
            progress_style: ProgressStyle::default(),
        }
    }
}

impl OutputConfig {
    /// Progress goes to stdout, so it is suppressed for machine-readable output.
    pub fn progress_enabled(&self) -> bool {
        self.show_progress && self.format != OutputFormat::Json
    }
}
