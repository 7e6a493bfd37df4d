//! Progress reporting for diagnostic runs

use colored::Colorize;
use diagnostics_application::DiagnosticProgressNotifier;
use diagnostics_domain::{DiagnosticStage, Finding, StageOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;

/// Reports progress with a single bar across the diagnostic steps
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(DiagnosticStage::ALL.len() as u64);
        bar.set_style(Self::step_style());
        Self { bar }
    }

    fn step_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: DiagnosticStage) {
        self.bar.set_prefix(format!("Step {}", stage.number()));
        self.bar.set_message(stage.display_name().to_string());
    }

    fn on_finding(&self, finding: &Finding) {
        self.bar.set_message(finding.to_string());
    }

    fn on_stage_complete(&self, stage: DiagnosticStage, outcome: StageOutcome) {
        self.bar.inc(1);
        let status = match outcome {
            StageOutcome::Passed => format!("{} {}", "v".green(), stage),
            StageOutcome::Failed => format!("{} {}", "x".red(), stage),
            StageOutcome::Skipped => format!("{} {}", "-".dimmed(), stage),
        };
        self.bar.set_message(status);

        if stage == DiagnosticStage::ConditionCheck {
            self.bar.finish_with_message(format!("{}", "Diagnostics complete!".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Prints one line when a step starts and one when it ends, with the
/// number of `>` marks giving the step number.
#[derive(Default)]
pub struct SimpleProgress {
    findings_in_stage: Cell<usize>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn marks(stage: DiagnosticStage) -> String {
        ">".repeat(stage.number())
    }
}

impl DiagnosticProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: DiagnosticStage) {
        self.findings_in_stage.set(0);
        let verb = if stage == DiagnosticStage::FieldCheck {
            "Initiating"
        } else {
            "Moving to"
        };
        println!(
            "{}{} Step {} ... {}",
            Self::marks(stage).cyan(),
            verb,
            stage.number(),
            stage.display_name().bold()
        );
    }

    fn on_finding(&self, _finding: &Finding) {
        self.findings_in_stage.set(self.findings_in_stage.get() + 1);
    }

    fn on_stage_complete(&self, stage: DiagnosticStage, outcome: StageOutcome) {
        let marks = Self::marks(stage);
        match outcome {
            StageOutcome::Passed => println!(
                "{}Step {} .. {}",
                marks.cyan(),
                stage.number(),
                "Complete".green()
            ),
            StageOutcome::Failed => println!(
                "{}Step {} .. {} ({} issue(s) found)",
                marks.cyan(),
                stage.number(),
                "Complete".red(),
                self.findings_in_stage.get()
            ),
            StageOutcome::Skipped => println!(
                "{}Step {} .. {}",
                marks.cyan(),
                stage.number(),
                "Skipped".dimmed()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagnostics_domain::{PartCategory, VehicleField};

    #[test]
    fn test_simple_progress_counts_findings_per_stage() {
        let progress = SimpleProgress::new();
        progress.on_stage_start(DiagnosticStage::FieldCheck);
        progress.on_finding(&Finding::MissingField {
            field: VehicleField::Year,
        });
        progress.on_finding(&Finding::MissingField {
            field: VehicleField::Make,
        });
        assert_eq!(progress.findings_in_stage.get(), 2);

        progress.on_stage_start(DiagnosticStage::PartPresenceCheck);
        assert_eq!(progress.findings_in_stage.get(), 0);
    }

    #[test]
    fn test_marks_follow_step_number() {
        assert_eq!(SimpleProgress::marks(DiagnosticStage::FieldCheck), ">");
        assert_eq!(SimpleProgress::marks(DiagnosticStage::ConditionCheck), ">>>");
    }

    #[test]
    fn test_progress_reporter_advances_per_stage() {
        let reporter = ProgressReporter::new();
        reporter.bar.set_draw_target(indicatif::ProgressDrawTarget::hidden());

        for stage in DiagnosticStage::ALL {
            reporter.on_stage_start(stage);
            reporter.on_finding(&Finding::MissingPart {
                category: PartCategory::Tire,
                count: 1,
            });
            reporter.on_stage_complete(stage, StageOutcome::Passed);
        }

        assert_eq!(reporter.bar.position(), 3);
        assert!(reporter.bar.is_finished());
    }
}
