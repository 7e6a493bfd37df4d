//! Reference bill of materials
//!
//! The parts a complete vehicle carries. The table is fixed for the life of
//! the process.

use crate::vehicle::PartCategory;

/// Required part counts, by category
#[derive(Debug)]
pub struct ReferenceBillOfMaterials {
    entries: &'static [(PartCategory, u32)],
}

impl ReferenceBillOfMaterials {
    /// `(category, required count)` pairs in reference order
    pub fn entries(&self) -> impl Iterator<Item = (PartCategory, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Required count for a category; zero for a category the table does not list.
    pub fn required(&self, category: PartCategory) -> u32 {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Number of parts a complete vehicle carries
    pub fn total_required(&self) -> u32 {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

/// The process-wide reference table.
pub fn reference_bill_of_materials() -> &'static ReferenceBillOfMaterials {
    &REFERENCE_BILL_OF_MATERIALS
}

static REFERENCE_BILL_OF_MATERIALS: ReferenceBillOfMaterials = ReferenceBillOfMaterials {
    entries: &[
        (PartCategory::Engine, 1),
        (PartCategory::Electrical, 1),
        (PartCategory::FuelFilter, 1),
        (PartCategory::OilFilter, 1),
        (PartCategory::Tire, 4),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_counts() {
        let bom = reference_bill_of_materials();
        assert_eq!(bom.required(PartCategory::Engine), 1);
        assert_eq!(bom.required(PartCategory::Electrical), 1);
        assert_eq!(bom.required(PartCategory::FuelFilter), 1);
        assert_eq!(bom.required(PartCategory::OilFilter), 1);
        assert_eq!(bom.required(PartCategory::Tire), 4);
        assert_eq!(bom.total_required(), 8);
    }

    #[test]
    fn test_entries_in_reference_order() {
        let categories: Vec<_> = reference_bill_of_materials()
            .entries()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(categories, PartCategory::ALL.to_vec());
    }
}
