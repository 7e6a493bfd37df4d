//! Diagnostic evaluator
//!
//! Runs the stages in order and stops at the first one that fails:
//!
//! ```text
//! FieldCheck -> PartPresenceCheck -> ConditionCheck -> Done
//! ```
//!
//! A failing stage still reports every finding it produced. The stages after
//! it do not run and are recorded as [`StageOutcome::Skipped`].

use super::finding::Finding;
use super::stage::{DiagnosticStage, StageOutcome, Verdict};
use crate::core::error::DomainError;
use crate::inventory::{ConditionClassifier, Reconciler};
use crate::vehicle::{VehicleRecord, VehicleSummary};
use serde::{Deserialize, Serialize};

/// Position of a [`DiagnosticRun`] in the stage sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticState {
    FieldCheck,
    PartPresenceCheck,
    ConditionCheck,
    Done,
}

impl DiagnosticState {
    /// The stage this state runs, `None` once done
    pub fn stage(&self) -> Option<DiagnosticStage> {
        match self {
            DiagnosticState::FieldCheck => Some(DiagnosticStage::FieldCheck),
            DiagnosticState::PartPresenceCheck => Some(DiagnosticStage::PartPresenceCheck),
            DiagnosticState::ConditionCheck => Some(DiagnosticStage::ConditionCheck),
            DiagnosticState::Done => None,
        }
    }

    fn next(self) -> Self {
        match self {
            DiagnosticState::FieldCheck => DiagnosticState::PartPresenceCheck,
            DiagnosticState::PartPresenceCheck => DiagnosticState::ConditionCheck,
            DiagnosticState::ConditionCheck | DiagnosticState::Done => DiagnosticState::Done,
        }
    }
}

/// Result of running (or skipping) one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: DiagnosticStage,
    pub outcome: StageOutcome,
    /// Findings in report order; empty unless the stage failed
    pub findings: Vec<Finding>,
}

/// Stage and outcome, without the findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResult {
    pub stage: DiagnosticStage,
    pub outcome: StageOutcome,
}

/// Complete result of diagnosing one vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub vehicle: VehicleSummary,
    pub verdict: Verdict,
    /// All findings, in the order they were reported
    pub findings: Vec<Finding>,
    pub stages: Vec<StageResult>,
}

impl Diagnosis {
    pub fn is_clean(&self) -> bool {
        self.verdict.is_clean()
    }

    /// The stage that stopped the run, if any
    pub fn failed_stage(&self) -> Option<DiagnosticStage> {
        self.stages
            .iter()
            .find(|s| s.outcome.is_failed())
            .map(|s| s.stage)
    }

    pub fn findings_for(&self, stage: DiagnosticStage) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.stage() == stage)
    }

    /// "<vehicle> <verdict description>"
    pub fn summary(&self) -> String {
        format!("{} {}", self.vehicle, self.verdict.description())
    }
}

/// A diagnostic run that can be advanced one stage at a time
pub struct DiagnosticRun<'a> {
    record: &'a VehicleRecord,
    state: DiagnosticState,
    halted: bool,
    findings: Vec<Finding>,
    stages: Vec<StageResult>,
}

impl<'a> DiagnosticRun<'a> {
    pub fn new(record: &'a VehicleRecord) -> Self {
        Self {
            record,
            state: DiagnosticState::FieldCheck,
            halted: false,
            findings: Vec::new(),
            stages: Vec::with_capacity(DiagnosticStage::ALL.len()),
        }
    }

    pub fn state(&self) -> DiagnosticState {
        self.state
    }

    /// Whether a stage has failed; later stages will be skipped
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The stage the next call to [`advance`](Self::advance) will handle
    pub fn next_stage(&self) -> Option<DiagnosticStage> {
        self.state.stage()
    }

    /// Run the current stage and move to the next state.
    ///
    /// Returns `None` once the run is done.
    pub fn advance(&mut self) -> Option<StageReport> {
        let stage = self.state.stage()?;

        let report = if self.halted {
            StageReport {
                stage,
                outcome: StageOutcome::Skipped,
                findings: Vec::new(),
            }
        } else {
            let findings = Self::run_stage(stage, self.record);
            let outcome = if findings.is_empty() {
                StageOutcome::Passed
            } else {
                StageOutcome::Failed
            };
            StageReport {
                stage,
                outcome,
                findings,
            }
        };

        if report.outcome.is_failed() {
            self.halted = true;
        }
        self.findings.extend(report.findings.iter().cloned());
        self.stages.push(StageResult {
            stage,
            outcome: report.outcome,
        });
        self.state = self.state.next();

        Some(report)
    }

    /// Run all remaining stages and produce the diagnosis
    pub fn finish(mut self) -> Diagnosis {
        while self.advance().is_some() {}

        let verdict = if self.halted {
            Verdict::NeedsAttention
        } else {
            Verdict::Clean
        };

        Diagnosis {
            vehicle: self.record.summary(),
            verdict,
            findings: self.findings,
            stages: self.stages,
        }
    }

    fn run_stage(stage: DiagnosticStage, record: &VehicleRecord) -> Vec<Finding> {
        match stage {
            DiagnosticStage::FieldCheck => Self::check_fields(record),
            DiagnosticStage::PartPresenceCheck => Self::check_part_presence(record),
            DiagnosticStage::ConditionCheck => Self::check_condition(record),
        }
    }

    fn check_fields(record: &VehicleRecord) -> Vec<Finding> {
        record
            .missing_fields()
            .into_iter()
            .map(|field| Finding::MissingField { field })
            .collect()
    }

    fn check_part_presence(record: &VehicleRecord) -> Vec<Finding> {
        Reconciler::reconcile(record.inventory())
            .iter()
            .map(|(category, count)| Finding::MissingPart { category, count })
            .collect()
    }

    fn check_condition(record: &VehicleRecord) -> Vec<Finding> {
        ConditionClassifier::find_damaged_parts(Some(record.inventory()))
            .into_iter()
            .map(|part| Finding::DamagedPart {
                category: part.category,
                condition: part.condition,
            })
            .collect()
    }
}

/// Entry point for diagnosing a vehicle record
pub struct DiagnosticEvaluator;

impl DiagnosticEvaluator {
    /// Start a steppable run.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidInput`] when `record` is `None`.
    pub fn start(record: Option<&VehicleRecord>) -> Result<DiagnosticRun<'_>, DomainError> {
        record
            .map(DiagnosticRun::new)
            .ok_or_else(|| DomainError::invalid_input("vehicle record must not be absent"))
    }

    /// Diagnose a record in one go.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidInput`] when `record` is `None`. Every other
    /// problem with the record is reported in the returned [`Diagnosis`].
    pub fn evaluate(record: Option<&VehicleRecord>) -> Result<Diagnosis, DomainError> {
        Self::start(record).map(DiagnosticRun::finish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{ConditionState, Part, PartCategory, VehicleField};

    fn full_part_set() -> Vec<Part> {
        let mut parts = vec![
            Part::new(PartCategory::Engine, ConditionState::Good),
            Part::new(PartCategory::Electrical, ConditionState::Good),
            Part::new(PartCategory::FuelFilter, ConditionState::Good),
            Part::new(PartCategory::OilFilter, ConditionState::Good),
        ];
        parts.extend(std::iter::repeat_n(
            Part::new(PartCategory::Tire, ConditionState::Good),
            4,
        ));
        parts
    }

    fn civic(parts: Vec<Part>) -> VehicleRecord {
        VehicleRecord::new()
            .with_year("2020")
            .with_make("Honda")
            .with_model("Civic")
            .with_parts(parts)
    }

    #[test]
    fn test_clean_vehicle() {
        let record = civic(full_part_set());
        let diagnosis = DiagnosticEvaluator::evaluate(Some(&record)).unwrap();

        assert_eq!(diagnosis.verdict, Verdict::Clean);
        assert!(diagnosis.findings.is_empty());
        assert!(
            diagnosis
                .stages
                .iter()
                .all(|s| s.outcome == StageOutcome::Passed)
        );
        assert_eq!(
            diagnosis.summary(),
            "2020 Honda Civic was found to be free of any issues."
        );
    }

    #[test]
    fn test_missing_make_stops_after_field_check() {
        let mut record = civic(Vec::new());
        record.make = None;

        let diagnosis = DiagnosticEvaluator::evaluate(Some(&record)).unwrap();

        assert_eq!(diagnosis.verdict, Verdict::NeedsAttention);
        assert_eq!(
            diagnosis.findings,
            vec![Finding::MissingField {
                field: VehicleField::Make
            }]
        );
        assert_eq!(diagnosis.failed_stage(), Some(DiagnosticStage::FieldCheck));
        assert_eq!(
            diagnosis.stages,
            vec![
                StageResult {
                    stage: DiagnosticStage::FieldCheck,
                    outcome: StageOutcome::Failed
                },
                StageResult {
                    stage: DiagnosticStage::PartPresenceCheck,
                    outcome: StageOutcome::Skipped
                },
                StageResult {
                    stage: DiagnosticStage::ConditionCheck,
                    outcome: StageOutcome::Skipped
                },
            ]
        );
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let record = VehicleRecord::new().with_parts(full_part_set());
        let diagnosis = DiagnosticEvaluator::evaluate(Some(&record)).unwrap();

        assert_eq!(
            diagnosis.findings,
            vec![
                Finding::MissingField {
                    field: VehicleField::Year
                },
                Finding::MissingField {
                    field: VehicleField::Make
                },
                Finding::MissingField {
                    field: VehicleField::Model
                },
            ]
        );
        assert_eq!(diagnosis.summary().split(' ').next(), Some("Unidentified"));
    }

    #[test]
    fn test_missing_tires() {
        let mut parts = full_part_set();
        parts.truncate(6);
        let diagnosis = DiagnosticEvaluator::evaluate(Some(&civic(parts))).unwrap();

        assert_eq!(
            diagnosis.findings,
            vec![Finding::MissingPart {
                category: PartCategory::Tire,
                count: 2
            }]
        );
        assert_eq!(
            diagnosis.failed_stage(),
            Some(DiagnosticStage::PartPresenceCheck)
        );
    }

    #[test]
    fn test_missing_parts_skip_condition_check() {
        let parts = vec![
            Part::new(PartCategory::Engine, ConditionState::Damaged),
            Part::new(PartCategory::Tire, ConditionState::Flat),
        ];
        let diagnosis = DiagnosticEvaluator::evaluate(Some(&civic(parts))).unwrap();

        assert!(
            diagnosis
                .findings
                .iter()
                .all(|f| matches!(f, Finding::MissingPart { .. }))
        );
        assert_eq!(
            diagnosis.findings_for(DiagnosticStage::ConditionCheck).count(),
            0
        );
    }

    #[test]
    fn test_rusted_tire() {
        let mut parts = full_part_set();
        parts[5].condition = ConditionState::Rusted;
        let diagnosis = DiagnosticEvaluator::evaluate(Some(&civic(parts))).unwrap();

        assert_eq!(diagnosis.verdict, Verdict::NeedsAttention);
        assert_eq!(
            diagnosis.findings,
            vec![Finding::DamagedPart {
                category: PartCategory::Tire,
                condition: ConditionState::Rusted
            }]
        );
    }

    #[test]
    fn test_damaged_parts_reported_in_inventory_order() {
        let mut parts = full_part_set();
        parts[7].condition = ConditionState::Flat;
        parts[0].condition = ConditionState::Sparking;
        let diagnosis = DiagnosticEvaluator::evaluate(Some(&civic(parts))).unwrap();

        assert_eq!(
            diagnosis.findings,
            vec![
                Finding::DamagedPart {
                    category: PartCategory::Engine,
                    condition: ConditionState::Sparking
                },
                Finding::DamagedPart {
                    category: PartCategory::Tire,
                    condition: ConditionState::Flat
                },
            ]
        );
    }

    #[test]
    fn test_absent_parts_list_misses_everything() {
        let record = VehicleRecord::new()
            .with_year("2020")
            .with_make("Honda")
            .with_model("Civic");
        let diagnosis = DiagnosticEvaluator::evaluate(Some(&record)).unwrap();

        assert_eq!(
            diagnosis.findings,
            vec![
                Finding::MissingPart {
                    category: PartCategory::Engine,
                    count: 1
                },
                Finding::MissingPart {
                    category: PartCategory::Electrical,
                    count: 1
                },
                Finding::MissingPart {
                    category: PartCategory::FuelFilter,
                    count: 1
                },
                Finding::MissingPart {
                    category: PartCategory::OilFilter,
                    count: 1
                },
                Finding::MissingPart {
                    category: PartCategory::Tire,
                    count: 4
                },
            ]
        );
    }

    #[test]
    fn test_absent_record_is_invalid_input() {
        let result = DiagnosticEvaluator::evaluate(None);
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut parts = full_part_set();
        parts[2].condition = ConditionState::Clogged;
        let record = civic(parts);

        let first = DiagnosticEvaluator::evaluate(Some(&record)).unwrap();
        let second = DiagnosticEvaluator::evaluate(Some(&record)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stepwise_run() {
        let record = civic(full_part_set());
        let mut run = DiagnosticEvaluator::start(Some(&record)).unwrap();

        assert_eq!(run.state(), DiagnosticState::FieldCheck);
        let first = run.advance().unwrap();
        assert_eq!(first.stage, DiagnosticStage::FieldCheck);
        assert_eq!(first.outcome, StageOutcome::Passed);
        assert_eq!(run.next_stage(), Some(DiagnosticStage::PartPresenceCheck));

        run.advance();
        run.advance();
        assert_eq!(run.state(), DiagnosticState::Done);
        assert!(run.advance().is_none());
        assert!(!run.is_halted());
        assert!(run.finish().is_clean());
    }

    #[test]
    fn test_failing_stage_halts_run() {
        let record = VehicleRecord::new().with_parts(full_part_set());
        let mut run = DiagnosticRun::new(&record);

        let report = run.advance().unwrap();
        assert_eq!(report.outcome, StageOutcome::Failed);
        assert_eq!(report.findings.len(), 3);
        assert!(run.is_halted());

        let skipped = run.advance().unwrap();
        assert_eq!(skipped.outcome, StageOutcome::Skipped);
        assert!(skipped.findings.is_empty());
    }
}
