//! Console output formatter for diagnostic reports

use crate::output::formatter::ReportFormatter;
use colored::{ColoredString, Colorize};
use diagnostics_application::DiagnosticReport;
use diagnostics_domain::{Finding, StageOutcome, Verdict};

/// Formats diagnostic reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn off ANSI colors for all subsequent output
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Greeting printed before a diagnostic run
    pub fn banner() -> String {
        Self::header("Welcome to the Car Diagnostic Center")
    }

    /// Format the complete report, step by step
    pub fn format_full(report: &DiagnosticReport) -> String {
        let diagnosis = &report.diagnosis;
        let mut output = String::new();

        output.push_str(&Self::header("Diagnostic Report"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Vehicle:".cyan().bold(),
            diagnosis.vehicle
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Date:".cyan().bold(),
            report.diagnosed_on
        ));

        for result in &diagnosis.stages {
            let title = format!("Step {}: {}", result.stage.number(), result.stage);
            output.push_str(&format!(
                "\n{} [{}]\n{}\n",
                title.cyan().bold(),
                Self::outcome_label(result.outcome),
                "-".repeat(40)
            ));

            match result.outcome {
                StageOutcome::Passed => output.push_str("  No issues found\n"),
                StageOutcome::Skipped => {
                    output.push_str(&format!("  {}\n", "Not run (an earlier step failed)".dimmed()))
                }
                StageOutcome::Failed => {
                    for finding in diagnosis.findings_for(result.stage) {
                        output.push_str(&format!("  * {}\n", Self::finding_line(finding)));
                    }
                }
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Verdict:".cyan().bold(),
            Self::verdict_label(diagnosis.verdict)
        ));
        output.push_str(&Self::summary_line(report));
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Format finding lines followed by the summary line (concise output)
    pub fn format_summary(report: &DiagnosticReport) -> String {
        let mut output = String::new();

        for finding in &report.diagnosis.findings {
            output.push_str(&Self::finding_line(finding).to_string());
            output.push('\n');
        }

        output.push_str(&Self::summary_line(report));
        output.push('\n');

        output
    }

    /// Format as JSON
    pub fn format_json(report: &DiagnosticReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// "<date> <vehicle> <verdict description>", colored by verdict
    pub fn summary_line(report: &DiagnosticReport) -> String {
        let line = report.summary_line();
        if report.is_clean() {
            line.green().bold().to_string()
        } else {
            line.red().bold().to_string()
        }
    }

    fn finding_line(finding: &Finding) -> ColoredString {
        match finding {
            Finding::MissingField { .. } | Finding::MissingPart { .. } => {
                finding.to_string().yellow()
            }
            Finding::DamagedPart { .. } => finding.to_string().red(),
        }
    }

    fn outcome_label(outcome: StageOutcome) -> ColoredString {
        match outcome {
            StageOutcome::Passed => outcome.as_str().green(),
            StageOutcome::Failed => outcome.as_str().red(),
            StageOutcome::Skipped => outcome.as_str().dimmed(),
        }
    }

    fn verdict_label(verdict: Verdict) -> ColoredString {
        match verdict {
            Verdict::Clean => verdict.to_string().green().bold(),
            Verdict::NeedsAttention => verdict.to_string().red().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format_full(&self, report: &DiagnosticReport) -> String {
        Self::format_full(report)
    }

    fn format_summary(&self, report: &DiagnosticReport) -> String {
        Self::format_summary(report)
    }

    fn format_json(&self, report: &DiagnosticReport) -> String {
        Self::format_json(report)
    }
}
