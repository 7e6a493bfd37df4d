//! Inventory checks against the reference bill of materials.
//!
//! - [`bill_of_materials`] — the fixed table of required parts
//! - [`reconciler::Reconciler`] — which required parts are missing
//! - [`classifier::ConditionClassifier`] — which installed parts are damaged

pub mod bill_of_materials;
pub mod classifier;
pub mod reconciler;

pub use bill_of_materials::{ReferenceBillOfMaterials, reference_bill_of_materials};
pub use classifier::{ConditionClassifier, ConditionPartition};
pub use reconciler::{MissingParts, PartCounts, Reconciler};
