//! Condition classification of installed parts

use crate::vehicle::Part;

/// Inventory split into working and damaged parts, each in inventory order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionPartition {
    pub working: Vec<Part>,
    pub damaged: Vec<Part>,
}

impl ConditionPartition {
    pub fn all_working(&self) -> bool {
        self.damaged.is_empty()
    }
}

/// Classifies parts by [`ConditionState::is_working`](crate::vehicle::ConditionState::is_working)
pub struct ConditionClassifier;

impl ConditionClassifier {
    /// Damaged parts in inventory order.
    ///
    /// An absent inventory has no damaged parts.
    pub fn find_damaged_parts(inventory: Option<&[Part]>) -> Vec<Part> {
        inventory
            .unwrap_or_default()
            .iter()
            .filter(|part| !part.is_in_working_condition())
            .copied()
            .collect()
    }

    pub fn partition(inventory: &[Part]) -> ConditionPartition {
        let (working, damaged) = inventory
            .iter()
            .copied()
            .partition(|part| part.is_in_working_condition());
        ConditionPartition { working, damaged }
    }
}
