//! Run Diagnostics use case
//!
//! Loads a vehicle record and runs the diagnostic stages on it, reporting
//! each stage to a progress notifier as it goes.

use crate::ports::progress::{DiagnosticProgressNotifier, NoProgress};
use crate::ports::record_source::{RecordSourceError, VehicleRecordSource};
use chrono::{Local, NaiveDate};
use diagnostics_domain::{DiagnosticEvaluator, Diagnosis, DomainError, StageOutcome, VehicleRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a diagnostic run
#[derive(Error, Debug)]
pub enum RunDiagnosticsError {
    #[error("Record source error: {0}")]
    Source(#[from] RecordSourceError),

    #[error(transparent)]
    InvalidInput(#[from] DomainError),
}

/// Output of the RunDiagnostics use case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Local date the diagnosis was made
    pub diagnosed_on: NaiveDate,
    #[serde(flatten)]
    pub diagnosis: Diagnosis,
}

impl DiagnosticReport {
    pub fn new(diagnosed_on: NaiveDate, diagnosis: Diagnosis) -> Self {
        Self {
            diagnosed_on,
            diagnosis,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnosis.is_clean()
    }

    /// "<date> <vehicle> <verdict description>"
    pub fn summary_line(&self) -> String {
        format!("{} {}", self.diagnosed_on, self.diagnosis.summary())
    }
}

/// Use case for diagnosing a vehicle record
pub struct RunDiagnosticsUseCase<S: VehicleRecordSource> {
    source: Arc<S>,
}

impl<S: VehicleRecordSource> RunDiagnosticsUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self) -> Result<DiagnosticReport, RunDiagnosticsError> {
        self.execute_with_progress(&NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        progress: &dyn DiagnosticProgressNotifier,
    ) -> Result<DiagnosticReport, RunDiagnosticsError> {
        info!("Loading {}", self.source.describe());
        let record = self.source.load()?;
        Self::diagnose(record.as_ref(), progress)
    }

    /// Diagnose a record, stamped with today's local date.
    ///
    /// # Errors
    ///
    /// [`RunDiagnosticsError::InvalidInput`] when `record` is `None`.
    pub fn diagnose(
        record: Option<&VehicleRecord>,
        progress: &dyn DiagnosticProgressNotifier,
    ) -> Result<DiagnosticReport, RunDiagnosticsError> {
        Self::diagnose_on(record, Local::now().date_naive(), progress)
    }

    /// Diagnose a record, stamped with the given date
    pub fn diagnose_on(
        record: Option<&VehicleRecord>,
        diagnosed_on: NaiveDate,
        progress: &dyn DiagnosticProgressNotifier,
    ) -> Result<DiagnosticReport, RunDiagnosticsError> {
        let mut run = DiagnosticEvaluator::start(record)?;

        while let Some(stage) = run.next_stage() {
            progress.on_stage_start(stage);
            let Some(report) = run.advance() else {
                break;
            };

            match report.outcome {
                StageOutcome::Passed => info!("Step {} ({}) passed", stage.number(), stage),
                StageOutcome::Failed => warn!(
                    "Step {} ({}) failed with {} finding(s)",
                    stage.number(),
                    stage,
                    report.findings.len()
                ),
                StageOutcome::Skipped => debug!("Step {} ({}) skipped", stage.number(), stage),
            }

            for finding in &report.findings {
                progress.on_finding(finding);
            }
            progress.on_stage_complete(stage, report.outcome);
        }

        let diagnosis = run.finish();
        info!("Verdict: {}", diagnosis.verdict);

        Ok(DiagnosticReport::new(diagnosed_on, diagnosis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::record_source::InMemoryRecordSource;
    use diagnostics_domain::{
        ConditionState, DiagnosticStage, Finding, Part, PartCategory, Verdict, VehicleField,
    };
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingProgress {
        events: RefCell<Vec<String>>,
    }

    impl DiagnosticProgressNotifier for RecordingProgress {
        fn on_stage_start(&self, stage: DiagnosticStage) {
            self.events
                .borrow_mut()
                .push(format!("start:{}", stage.as_str()));
        }

        fn on_finding(&self, finding: &Finding) {
            self.events.borrow_mut().push(format!("finding:{}", finding));
        }

        fn on_stage_complete(&self, stage: DiagnosticStage, outcome: StageOutcome) {
            self.events
                .borrow_mut()
                .push(format!("complete:{}:{}", stage.as_str(), outcome));
        }
    }

    struct FailingSource;

    impl VehicleRecordSource for FailingSource {
        fn load(&self) -> Result<Option<VehicleRecord>, RecordSourceError> {
            Err(RecordSourceError::UnsupportedFormat("csv".to_string()))
        }
    }

    fn complete_record() -> VehicleRecord {
        let mut parts = vec![
            Part::new(PartCategory::Engine, ConditionState::New),
            Part::new(PartCategory::Electrical, ConditionState::Good),
            Part::new(PartCategory::FuelFilter, ConditionState::Worn),
            Part::new(PartCategory::OilFilter, ConditionState::Good),
        ];
        parts.extend(std::iter::repeat_n(
            Part::new(PartCategory::Tire, ConditionState::Good),
            4,
        ));
        VehicleRecord::new()
            .with_year("2020")
            .with_make("Honda")
            .with_model("Civic")
            .with_parts(parts)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_execute_clean_record() {
        let use_case = RunDiagnosticsUseCase::new(Arc::new(InMemoryRecordSource::new(
            complete_record(),
        )));
        let report = use_case.execute().unwrap();

        assert!(report.is_clean());
        assert!(report.diagnosis.findings.is_empty());
    }

    #[test]
    fn test_execute_empty_source_is_invalid_input() {
        let use_case = RunDiagnosticsUseCase::new(Arc::new(InMemoryRecordSource::empty()));
        let result = use_case.execute();
        assert!(matches!(
            result,
            Err(RunDiagnosticsError::InvalidInput(DomainError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_execute_propagates_source_errors() {
        let use_case = RunDiagnosticsUseCase::new(Arc::new(FailingSource));
        let result = use_case.execute();
        assert!(matches!(result, Err(RunDiagnosticsError::Source(_))));
    }

    #[test]
    fn test_progress_events_for_failing_field_check() {
        let mut record = complete_record();
        record.year = None;
        record.model = None;

        let progress = RecordingProgress::default();
        let report = RunDiagnosticsUseCase::<InMemoryRecordSource>::diagnose_on(
            Some(&record),
            date(),
            &progress,
        )
        .unwrap();

        assert_eq!(report.diagnosis.verdict, Verdict::NeedsAttention);
        assert_eq!(
            report.diagnosis.findings,
            vec![
                Finding::MissingField {
                    field: VehicleField::Year
                },
                Finding::MissingField {
                    field: VehicleField::Model
                },
            ]
        );
        assert_eq!(
            progress.events.into_inner(),
            vec![
                "start:field_check",
                "finding:Missing Car data field Detected: year",
                "finding:Missing Car data field Detected: model",
                "complete:field_check:failed",
                "start:part_presence_check",
                "complete:part_presence_check:skipped",
                "start:condition_check",
                "complete:condition_check:skipped",
            ]
        );
    }

    #[test]
    fn test_summary_line() {
        let mut record = complete_record();
        record.parts = None;

        let report = RunDiagnosticsUseCase::<InMemoryRecordSource>::diagnose_on(
            Some(&record),
            date(),
            &NoProgress,
        )
        .unwrap();

        assert_eq!(
            report.summary_line(),
            "2024-03-15 2020 Honda Civic needs further attention as the diagnostic system found some issues."
        );
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = RunDiagnosticsUseCase::<InMemoryRecordSource>::diagnose_on(
            Some(&complete_record()),
            date(),
            &NoProgress,
        )
        .unwrap();

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["diagnosed_on"], "2024-03-15");
        assert_eq!(value["verdict"], "clean");
        assert_eq!(value["vehicle"]["make"], "Honda");
        assert_eq!(value["stages"].as_array().map(Vec::len), Some(3));
    }
}
