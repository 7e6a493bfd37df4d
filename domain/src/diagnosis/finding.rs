//! Diagnostic findings

use super::stage::DiagnosticStage;
use crate::vehicle::{ConditionState, PartCategory, VehicleField};
use serde::{Deserialize, Serialize};

/// One reportable diagnostic observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A descriptive field is absent
    MissingField { field: VehicleField },
    /// Fewer parts of a category are installed than required (`count > 0`)
    MissingPart { category: PartCategory, count: u32 },
    /// An installed part is not in working condition
    DamagedPart {
        category: PartCategory,
        condition: ConditionState,
    },
}

impl Finding {
    /// The stage that produces this kind of finding
    pub fn stage(&self) -> DiagnosticStage {
        match self {
            Finding::MissingField { .. } => DiagnosticStage::FieldCheck,
            Finding::MissingPart { .. } => DiagnosticStage::PartPresenceCheck,
            Finding::DamagedPart { .. } => DiagnosticStage::ConditionCheck,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::MissingField { field } => {
                write!(f, "Missing Car data field Detected: {}", field)
            }
            Finding::MissingPart { category, count } => {
                write!(f, "Missing Part(s) Detected: {} - Count: {}", category, count)
            }
            Finding::DamagedPart {
                category,
                condition,
            } => write!(
                f,
                "Damaged Part Detected: {} - Condition: {}",
                category, condition
            ),
        }
    }
}
