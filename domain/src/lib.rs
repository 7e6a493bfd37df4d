//! Domain layer for car-diagnostics
//!
//! This crate contains the vehicle model and the diagnostic rules.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Diagnostic stages
//!
//! A vehicle record is checked in three stages, stopping at the first that fails:
//!
//! 1. **Field check**: year, make and model are present
//! 2. **Part presence check**: the inventory covers the reference bill of materials
//! 3. **Condition check**: every installed part is in working condition
//!
//! ## Findings and verdict
//!
//! Problems are reported as [`Finding`]s, never as errors. The only error is
//! being handed no record at all ([`DomainError::InvalidInput`]).

pub mod config;
pub mod core;
pub mod diagnosis;
pub mod inventory;
pub mod vehicle;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use diagnosis::{
    DiagnosticEvaluator, DiagnosticRun, DiagnosticStage, DiagnosticState, Diagnosis, Finding,
    StageOutcome, StageReport, StageResult, Verdict,
};
pub use inventory::{
    ConditionClassifier, ConditionPartition, MissingParts, PartCounts, Reconciler,
    ReferenceBillOfMaterials, reference_bill_of_materials,
};
pub use vehicle::{ConditionState, Part, PartCategory, VehicleField, VehicleRecord, VehicleSummary};
