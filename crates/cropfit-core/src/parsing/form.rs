use crate::error::CropfitError;
use crate::model::{is_known_region, normalize_region, FarmConditions, KNOWN_REGIONS};
use crate::parsing::values::parse_number;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Farm conditions as entered by a user, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInput {
    pub soil_ph: String,
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub temperature: String,
    pub humidity: String,
    pub rainfall: String,
    pub region: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            soil_ph: "6.5".into(),
            nitrogen: "50".into(),
            phosphorus: "30".into(),
            potassium: "40".into(),
            temperature: "25".into(),
            humidity: "60".into(),
            rainfall: "120".into(),
            region: "plains".into(),
        }
    }
}

impl FormInput {
    /// The numeric fields with their names and accepted bounds, in form order.
    pub fn numeric_fields(&self) -> [(&'static str, &str, Bounds); 7] {
        [
            ("soilPh", self.soil_ph.as_str(), Bounds::between(0, 14)),
            ("nitrogen", self.nitrogen.as_str(), Bounds::at_least(0)),
            ("phosphorus", self.phosphorus.as_str(), Bounds::at_least(0)),
            ("potassium", self.potassium.as_str(), Bounds::at_least(0)),
            ("temperature", self.temperature.as_str(), Bounds::between(-10, 50)),
            ("humidity", self.humidity.as_str(), Bounds::between(0, 100)),
            ("rainfall", self.rainfall.as_str(), Bounds::at_least(0)),
        ]
    }
}

/// Plausibility bounds for a form field (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Decimal,
    pub max: Option<Decimal>,
}

impl Bounds {
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            min: Decimal::from(min),
            max: Some(Decimal::from(max)),
        }
    }

    pub fn at_least(min: i64) -> Self {
        Self {
            min: Decimal::from(min),
            max: None,
        }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// Parse and validate a form into well-typed conditions.
///
/// Rejects empty fields, non-numeric text and values outside the form's
/// accepted bounds. The region is trimmed and lowercased; tags outside
/// [`KNOWN_REGIONS`] are accepted since custom catalogs may use their own.
pub fn parse_form(form: &FormInput) -> Result<FarmConditions, CropfitError> {
    let [soil_ph, nitrogen, phosphorus, potassium, temperature, humidity, rainfall] =
        parse_numeric_fields(form)?;

    let region = normalize_region(&form.region);
    if region.is_empty() {
        return Err(CropfitError::MissingField("region"));
    }
    if !is_known_region(&region) {
        tracing::warn!(
            "Region '{}' is not one of the standard regions ({})",
            region,
            KNOWN_REGIONS.join(", ")
        );
    }

    Ok(FarmConditions {
        nitrogen,
        phosphorus,
        potassium,
        soil_ph,
        temperature,
        humidity,
        rainfall,
        region,
    })
}

fn parse_numeric_fields(form: &FormInput) -> Result<[Decimal; 7], CropfitError> {
    let mut values = [Decimal::ZERO; 7];
    for (slot, (field, raw, bounds)) in values.iter_mut().zip(form.numeric_fields()) {
        let value = parse_number(field, raw)?;
        if !bounds.contains(value) {
            return Err(CropfitError::OutOfRange {
                field,
                value: raw.trim().to_string(),
                min: bounds.min,
                max: bounds.max,
            });
        }
        *slot = value;
    }
    Ok(values)
}
