//! Output formatter trait

use diagnostics_application::DiagnosticReport;
use diagnostics_domain::OutputFormat;

/// Trait for formatting diagnostic reports
pub trait ReportFormatter {
    /// Findings grouped by step, with header and summary
    fn format_full(&self, report: &DiagnosticReport) -> String;

    /// Finding lines followed by the summary line
    fn format_summary(&self, report: &DiagnosticReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &DiagnosticReport) -> String;

    fn render(&self, report: &DiagnosticReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format_full(report),
            OutputFormat::Summary => self.format_summary(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
