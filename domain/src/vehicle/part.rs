//! Installed parts and their classification enums

use serde::{Deserialize, Serialize};

/// Category of a vehicle component
///
/// The set is closed. Declaration order matches the reference bill of
/// materials, so ordered collections keyed by category iterate in the
/// same order the diagnostics report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartCategory {
    Engine,
    Electrical,
    FuelFilter,
    OilFilter,
    Tire,
}

impl PartCategory {
    /// All categories in reference order
    pub const ALL: [PartCategory; 5] = [
        PartCategory::Engine,
        PartCategory::Electrical,
        PartCategory::FuelFilter,
        PartCategory::OilFilter,
        PartCategory::Tire,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartCategory::Engine => "ENGINE",
            PartCategory::Electrical => "ELECTRICAL",
            PartCategory::FuelFilter => "FUEL_FILTER",
            PartCategory::OilFilter => "OIL_FILTER",
            PartCategory::Tire => "TIRE",
        }
    }
}

impl std::fmt::Display for PartCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PartCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        PartCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown part type: {}. Valid: engine, electrical, fuel_filter, oil_filter, tire",
                    s
                )
            })
    }
}

/// Wear level of an installed part
///
/// Only [`New`](ConditionState::New), [`Good`](ConditionState::Good) and
/// [`Worn`](ConditionState::Worn) count as working. Every other state is
/// damaged, including any state added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionState {
    New,
    Good,
    Worn,
    Used,
    Damaged,
    Rusted,
    Flat,
    Sparking,
    NoPower,
    Clogged,
}

impl ConditionState {
    pub const ALL: [ConditionState; 10] = [
        ConditionState::New,
        ConditionState::Good,
        ConditionState::Worn,
        ConditionState::Used,
        ConditionState::Damaged,
        ConditionState::Rusted,
        ConditionState::Flat,
        ConditionState::Sparking,
        ConditionState::NoPower,
        ConditionState::Clogged,
    ];

    /// Whether a part in this state is still in working condition
    pub fn is_working(&self) -> bool {
        matches!(
            self,
            ConditionState::New | ConditionState::Good | ConditionState::Worn
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionState::New => "NEW",
            ConditionState::Good => "GOOD",
            ConditionState::Worn => "WORN",
            ConditionState::Used => "USED",
            ConditionState::Damaged => "DAMAGED",
            ConditionState::Rusted => "RUSTED",
            ConditionState::Flat => "FLAT",
            ConditionState::Sparking => "SPARKING",
            ConditionState::NoPower => "NO_POWER",
            ConditionState::Clogged => "CLOGGED",
        }
    }
}

impl std::fmt::Display for ConditionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ConditionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        ConditionState::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| format!("Unknown condition: {}", s))
    }
}

/// A single installed part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "type")]
    pub category: PartCategory,
    pub condition: ConditionState,
}

impl Part {
    pub fn new(category: PartCategory, condition: ConditionState) -> Self {
        Self {
            category,
            condition,
        }
    }

    pub fn is_in_working_condition(&self) -> bool {
        self.condition.is_working()
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.category, self.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_states() {
        let working: Vec<_> = ConditionState::ALL
            .into_iter()
            .filter(ConditionState::is_working)
            .collect();
        assert_eq!(
            working,
            vec![
                ConditionState::New,
                ConditionState::Good,
                ConditionState::Worn
            ]
        );
    }

    #[test]
    fn test_degraded_states_are_not_working() {
        assert!(!ConditionState::Used.is_working());
        assert!(!ConditionState::Rusted.is_working());
        assert!(!ConditionState::NoPower.is_working());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            "ENGINE".parse::<PartCategory>().ok(),
            Some(PartCategory::Engine)
        );
        assert_eq!(
            "fuel_filter".parse::<PartCategory>().ok(),
            Some(PartCategory::FuelFilter)
        );
        assert_eq!(
            "oil-filter".parse::<PartCategory>().ok(),
            Some(PartCategory::OilFilter)
        );
        assert!("wheel".parse::<PartCategory>().is_err());
    }

    #[test]
    fn test_parse_condition() {
        assert_eq!(
            "rusted".parse::<ConditionState>().ok(),
            Some(ConditionState::Rusted)
        );
        assert_eq!(
            "NO_POWER".parse::<ConditionState>().ok(),
            Some(ConditionState::NoPower)
        );
        assert!("shiny".parse::<ConditionState>().is_err());
    }

    #[test]
    fn test_category_order_matches_reference_order() {
        let mut sorted = PartCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, PartCategory::ALL);
    }

    #[test]
    fn test_part_serde_uses_type_key() {
        let part = Part::new(PartCategory::Tire, ConditionState::Flat);
        let json = serde_json::to_string(&part).unwrap();
        assert_eq!(json, r#"{"type":"TIRE","condition":"FLAT"}"#);

        let back: Part = serde_json::from_str(&json).unwrap();
        assert_eq!(back, part);
    }

    #[test]
    fn test_display() {
        assert_eq!(PartCategory::FuelFilter.to_string(), "FUEL_FILTER");
        assert_eq!(ConditionState::NoPower.to_string(), "NO_POWER");
        assert_eq!(
            Part::new(PartCategory::Engine, ConditionState::Good).to_string(),
            "ENGINE (GOOD)"
        );
    }
}
