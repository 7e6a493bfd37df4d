//! Diagnostic stages, their outcomes, and the overall verdict

use serde::{Deserialize, Serialize};

/// A stage of the diagnostic process, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticStage {
    /// Year, make and model are present
    FieldCheck,
    /// Every required part is installed
    PartPresenceCheck,
    /// Every installed part is in working condition
    ConditionCheck,
}

impl DiagnosticStage {
    pub const ALL: [DiagnosticStage; 3] = [
        DiagnosticStage::FieldCheck,
        DiagnosticStage::PartPresenceCheck,
        DiagnosticStage::ConditionCheck,
    ];

    /// 1-based step number
    pub fn number(&self) -> usize {
        match self {
            DiagnosticStage::FieldCheck => 1,
            DiagnosticStage::PartPresenceCheck => 2,
            DiagnosticStage::ConditionCheck => 3,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DiagnosticStage::FieldCheck => "field_check",
            DiagnosticStage::PartPresenceCheck => "part_presence_check",
            DiagnosticStage::ConditionCheck => "condition_check",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            DiagnosticStage::FieldCheck => "Data Field Check",
            DiagnosticStage::PartPresenceCheck => "Missing Parts Check",
            DiagnosticStage::ConditionCheck => "Part Condition Check",
        }
    }
}

impl std::fmt::Display for DiagnosticStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a stage ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageOutcome {
    Passed,
    Failed,
    /// Not run because an earlier stage failed
    Skipped,
}

impl StageOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, StageOutcome::Failed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            StageOutcome::Passed => "passed",
            StageOutcome::Failed => "failed",
            StageOutcome::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final classification of a diagnostic run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Clean,
    NeedsAttention,
}

impl Verdict {
    pub fn is_clean(&self) -> bool {
        matches!(self, Verdict::Clean)
    }

    /// Sentence fragment completing "<vehicle> ..."
    pub fn description(&self) -> &str {
        match self {
            Verdict::Clean => "was found to be free of any issues.",
            Verdict::NeedsAttention => {
                "needs further attention as the diagnostic system found some issues."
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Clean => write!(f, "CLEAN"),
            Verdict::NeedsAttention => write!(f, "NEEDS ATTENTION"),
        }
    }
}
