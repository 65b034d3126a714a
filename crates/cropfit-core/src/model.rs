use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Region tags offered to farmers and used by the built-in catalog.
pub const KNOWN_REGIONS: &[&str] = &["plains", "coastal", "hills", "delta", "desert"];

/// Soil and climate measurements for one farm.
///
/// Values are taken as given: the engine does no range checking, so a pH of 30
/// or negative rainfall simply scores low. Text input is parsed into this type
/// by [`crate::parsing::form`] before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmConditions {
    pub nitrogen: Decimal,
    pub phosphorus: Decimal,
    pub potassium: Decimal,
    pub soil_ph: Decimal,
    /// Ambient temperature (°C).
    pub temperature: Decimal,
    /// Relative humidity (%).
    pub humidity: Decimal,
    /// Monthly rainfall (mm).
    pub rainfall: Decimal,
    pub region: String,
}

/// Display tier for a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    High,
    Medium,
    Low,
}

impl MatchLevel {
    pub fn from_confidence(confidence: Decimal) -> MatchLevel {
        if confidence > Decimal::from(80) {
            MatchLevel::High
        } else if confidence > Decimal::from(60) {
            MatchLevel::Medium
        } else {
            MatchLevel::Low
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchLevel::High => write!(f, "High"),
            MatchLevel::Medium => write!(f, "Medium"),
            MatchLevel::Low => write!(f, "Low"),
        }
    }
}

/// Normalize a region tag for comparison against catalog regions.
pub fn normalize_region(s: &str) -> String {
    s.trim().to_lowercase()
}

pub fn is_known_region(s: &str) -> bool {
    KNOWN_REGIONS.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_match_level_tiers() {
        assert_eq!(MatchLevel::from_confidence(dec!(100)), MatchLevel::High);
        assert_eq!(MatchLevel::from_confidence(dec!(80.5)), MatchLevel::High);
        assert_eq!(MatchLevel::from_confidence(dec!(80)), MatchLevel::Medium);
        assert_eq!(MatchLevel::from_confidence(dec!(60.1)), MatchLevel::Medium);
        assert_eq!(MatchLevel::from_confidence(dec!(60)), MatchLevel::Low);
        assert_eq!(MatchLevel::from_confidence(dec!(41)), MatchLevel::Low);
    }

    #[test]
    fn test_normalize_region() {
        assert_eq!(normalize_region("  Plains "), "plains");
        assert!(is_known_region("delta"));
        assert!(!is_known_region("tundra"));
    }
}
