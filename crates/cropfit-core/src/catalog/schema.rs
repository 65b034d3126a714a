use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named set of crop profiles used as the scoring reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub crops: Vec<CropProfile>,
}

/// Growing requirements for a single crop.
///
/// Every range is inclusive on both ends. Nutrient requirements are minimums
/// only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProfile {
    pub name: String,
    pub description: String,
    pub ph_min: Decimal,
    pub ph_max: Decimal,
    pub nitrogen_min: Decimal,
    pub phosphorus_min: Decimal,
    pub potassium_min: Decimal,
    /// Temperature range (°C).
    pub temp_min: Decimal,
    pub temp_max: Decimal,
    /// Monthly rainfall range (mm).
    pub rainfall_min: Decimal,
    pub rainfall_max: Decimal,
    /// Relative humidity range (%).
    pub humidity_min: Decimal,
    pub humidity_max: Decimal,
    /// Region tags where the crop earns the regional bonus.
    #[serde(default)]
    pub regions: BTreeSet<String>,
}

impl CropProfile {
    /// Named (min, max) pairs, in the order they appear in the schema.
    pub fn ranges(&self) -> [(&'static str, Decimal, Decimal); 4] {
        [
            ("ph", self.ph_min, self.ph_max),
            ("temp", self.temp_min, self.temp_max),
            ("rainfall", self.rainfall_min, self.rainfall_max),
            ("humidity", self.humidity_min, self.humidity_max),
        ]
    }
}
