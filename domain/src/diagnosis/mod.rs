//! Diagnosis of vehicle records.
//!
//! - [`evaluator::DiagnosticEvaluator`] — runs the stages and short-circuits
//!   on the first failing one
//! - [`finding::Finding`] — what a stage reports
//! - [`stage`] — stage identifiers, outcomes and the final [`stage::Verdict`]

pub mod evaluator;
pub mod finding;
pub mod stage;

pub use evaluator::{
    DiagnosticEvaluator, DiagnosticRun, DiagnosticState, Diagnosis, StageReport, StageResult,
};
pub use finding::Finding;
pub use stage::{DiagnosticStage, StageOutcome, Verdict};
