//! XML document shape of a vehicle record
//!
//! ```xml
//! <car>
//!     <year>2020</year>
//!     <make>Honda</make>
//!     <model>Civic</model>
//!     <parts>
//!         <part type="ENGINE" condition="GOOD"/>
//!         <part type="TIRE" condition="FLAT"/>
//!     </parts>
//! </car>
//! ```
//!
//! `type` and `condition` may also be given as child elements of `<part>`.

use diagnostics_domain::{ConditionState, Part, PartCategory, VehicleRecord};
use quick_xml::de::DeError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename = "car")]
struct CarDocument {
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    make: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    parts: Option<PartsDocument>,
}

#[derive(Debug, Deserialize)]
struct PartsDocument {
    #[serde(rename = "part", default)]
    items: Vec<PartDocument>,
}

#[derive(Debug, Deserialize)]
struct PartDocument {
    #[serde(rename = "@type", alias = "type")]
    category: PartCategory,
    #[serde(rename = "@condition", alias = "condition")]
    condition: ConditionState,
}

impl CarDocument {
    fn into_record(self) -> VehicleRecord {
        VehicleRecord {
            year: self.year,
            make: self.make,
            model: self.model,
            parts: self.parts.map(|parts| {
                parts
                    .items
                    .into_iter()
                    .map(|p| Part::new(p.category, p.condition))
                    .collect()
            }),
        }
    }
}

pub(crate) fn parse_car_xml(xml: &str) -> Result<VehicleRecord, DeError> {
    let doc: CarDocument = quick_xml::de::from_str(xml)?;
    Ok(doc.into_record())
}
