//! Reconciles an inventory against the reference bill of materials

use super::bill_of_materials::reference_bill_of_materials;
use crate::core::error::DomainError;
use crate::vehicle::{Part, PartCategory};
use std::collections::BTreeMap;

/// Number of installed parts per category
///
/// Lookups for a category with no parts return zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartCounts(BTreeMap<PartCategory, u32>);

impl PartCounts {
    pub fn tally(inventory: &[Part]) -> Self {
        let mut counts = BTreeMap::new();
        for part in inventory {
            *counts.entry(part.category).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn count(&self, category: PartCategory) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

/// Missing categories and how many parts of each are missing
///
/// Every count is strictly positive. Iteration follows reference order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingParts(BTreeMap<PartCategory, u32>);

impl MissingParts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, category: PartCategory) -> Option<u32> {
        self.0.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PartCategory, u32)> + '_ {
        self.0.iter().map(|(c, n)| (*c, *n))
    }

    /// Total number of missing parts across all categories
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

/// Compares installed parts with the reference bill of materials
pub struct Reconciler;

impl Reconciler {
    /// Missing parts for an inventory that may be absent.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidInput`] when `inventory` is `None`. Callers that
    /// treat an absent inventory as empty should use [`Reconciler::reconcile`].
    pub fn compute_missing_parts(inventory: Option<&[Part]>) -> Result<MissingParts, DomainError> {
        inventory
            .map(Self::reconcile)
            .ok_or_else(|| DomainError::invalid_input("parts inventory must not be absent"))
    }

    /// Missing parts for an inventory.
    ///
    /// Over-supplied categories and categories outside the reference table are
    /// never reported.
    pub fn reconcile(inventory: &[Part]) -> MissingParts {
        let counts = PartCounts::tally(inventory);
        let missing = reference_bill_of_materials()
            .entries()
            .filter_map(|(category, required)| {
                let shortfall = required.saturating_sub(counts.count(category));
                (shortfall > 0).then_some((category, shortfall))
            })
            .collect();
        MissingParts(missing)
    }
}
