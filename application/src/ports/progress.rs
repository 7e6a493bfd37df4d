//! Progress notification port
//!
//! Defines the interface for reporting progress while a vehicle is diagnosed.

use diagnostics_domain::{DiagnosticStage, Finding, StageOutcome};

/// Callback for progress updates during a diagnostic run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (plain step messages, progress bars, etc.)
pub trait DiagnosticProgressNotifier {
    /// Called before a stage runs (also for stages that end up skipped)
    fn on_stage_start(&self, stage: DiagnosticStage);

    /// Called for each finding, in report order
    fn on_finding(&self, _finding: &Finding) {}

    /// Called when a stage has run or been skipped
    fn on_stage_complete(&self, stage: DiagnosticStage, outcome: StageOutcome);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DiagnosticProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: DiagnosticStage) {}
    fn on_stage_complete(&self, _stage: DiagnosticStage, _outcome: StageOutcome) {}
}
