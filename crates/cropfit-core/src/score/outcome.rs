use crate::model::MatchLevel;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the scored suitability factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    SoilPh,
    Npk,
    Temperature,
    Rainfall,
    Humidity,
    Region,
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factor::SoilPh => write!(f, "Soil pH"),
            Factor::Npk => write!(f, "NPK"),
            Factor::Temperature => write!(f, "Temperature"),
            Factor::Rainfall => write!(f, "Rainfall"),
            Factor::Humidity => write!(f, "Humidity"),
            Factor::Region => write!(f, "Region"),
        }
    }
}

/// Points awarded for a single factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub points: u32,
    pub max_points: u32,
    /// Human-readable explanation of the points awarded.
    pub reason: String,
}

/// Full scoring breakdown for one crop, before filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropScore {
    pub name: String,
    pub description: String,
    /// Sum of all factor points (max 110).
    pub raw_score: u32,
    /// Normalized score in [0, 100].
    pub confidence: Decimal,
    pub factors: Vec<FactorScore>,
}

/// A crop recommended for the given conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub confidence: Decimal,
    pub description: String,
}

impl Recommendation {
    /// Confidence rounded to a whole percentage for display.
    pub fn display_percent(&self) -> Decimal {
        display_percent(self.confidence)
    }

    pub fn match_level(&self) -> MatchLevel {
        MatchLevel::from_confidence(self.confidence)
    }
}

impl From<&CropScore> for Recommendation {
    fn from(score: &CropScore) -> Self {
        Recommendation {
            name: score.name.clone(),
            confidence: score.confidence,
            description: score.description.clone(),
        }
    }
}

/// Round half away from zero to a whole number ("87% match").
pub fn display_percent(confidence: Decimal) -> Decimal {
    confidence.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_percent_rounds_half_up() {
        assert_eq!(display_percent(dec!(90.909090)), dec!(91));
        assert_eq!(display_percent(dec!(72.5)), dec!(73));
        assert_eq!(display_percent(dec!(45.45)), dec!(45));
    }

    #[test]
    fn test_recommendation_match_level() {
        let rec = Recommendation {
            name: "Rice".into(),
            confidence: dec!(63.6),
            description: String::new(),
        };
        assert_eq!(rec.match_level(), MatchLevel::Medium);
    }
}
