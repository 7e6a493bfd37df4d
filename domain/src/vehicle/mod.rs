//! Vehicle records and the parts installed in them.
//!
//! - [`record::VehicleRecord`] — the record under diagnosis
//! - [`part::Part`] — one installed part, classified by
//!   [`part::PartCategory`] and [`part::ConditionState`]

pub mod part;
pub mod record;

pub use part::{ConditionState, Part, PartCategory};
pub use record::{VehicleField, VehicleRecord, VehicleSummary};
