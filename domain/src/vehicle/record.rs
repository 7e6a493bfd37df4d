//! Vehicle record entity

use super::part::Part;
use serde::{Deserialize, Serialize};

/// Descriptive field of a vehicle record that must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleField {
    Year,
    Make,
    Model,
}

impl VehicleField {
    /// Fields in the order they are validated
    pub const ALL: [VehicleField; 3] = [VehicleField::Year, VehicleField::Make, VehicleField::Model];

    pub fn name(&self) -> &'static str {
        match self {
            VehicleField::Year => "year",
            VehicleField::Make => "make",
            VehicleField::Model => "model",
        }
    }
}

impl std::fmt::Display for VehicleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A vehicle as supplied to the diagnostics
///
/// Every attribute is optional: absence is something the diagnostics report
/// on, not something the decoder rejects. `parts: None` (no inventory at all)
/// is distinct from `Some(vec![])` (an inventory with nothing in it), though
/// both are diagnosed the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleRecord {
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub parts: Option<Vec<Part>>,
}

impl VehicleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_parts(mut self, parts: Vec<Part>) -> Self {
        self.parts = Some(parts);
        self
    }

    /// Value of a descriptive field, if present
    pub fn field(&self, field: VehicleField) -> Option<&str> {
        match field {
            VehicleField::Year => self.year.as_deref(),
            VehicleField::Make => self.make.as_deref(),
            VehicleField::Model => self.model.as_deref(),
        }
    }

    /// Descriptive fields that are absent, in validation order
    pub fn missing_fields(&self) -> Vec<VehicleField> {
        VehicleField::ALL
            .into_iter()
            .filter(|f| self.field(*f).is_none())
            .collect()
    }

    /// Installed parts; an absent inventory reads as empty.
    pub fn inventory(&self) -> &[Part] {
        self.parts.as_deref().unwrap_or_default()
    }

    pub fn summary(&self) -> VehicleSummary {
        VehicleSummary {
            year: self.year.clone(),
            make: self.make.clone(),
            model: self.model.clone(),
        }
    }
}

/// Year/make/model identification of a diagnosed vehicle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl VehicleSummary {
    pub fn is_identified(&self) -> bool {
        self.year.is_some() || self.make.is_some() || self.model.is_some()
    }
}

impl std::fmt::Display for VehicleSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_identified() {
            return write!(f, "Unidentified vehicle");
        }
        let present: Vec<&str> = [&self.year, &self.make, &self.model]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .collect();
        write!(f, "{}", present.join(" "))
    }
}
