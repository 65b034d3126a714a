use crate::catalog::schema::CropProfile;
use crate::model::FarmConditions;
use crate::score::outcome::{CropScore, Factor, FactorScore, Recommendation};
use crate::score::weights::*;
use rust_decimal::Decimal;

/// Rank the catalog against the given conditions and return the best matches.
///
/// Every crop is scored, crops at or below the confidence cutoff are dropped,
/// the rest are ordered by descending confidence (ties keep catalog order) and
/// at most [`MAX_RECOMMENDATIONS`] are returned.
pub fn recommend(conditions: &FarmConditions, crops: &[CropProfile]) -> Vec<Recommendation> {
    let recommendations = select_recommendations(&rank(conditions, crops));

    tracing::debug!(
        "Recommended {} of {} crops for region '{}'",
        recommendations.len(),
        crops.len(),
        conditions.region
    );

    recommendations
}

/// Score every crop and sort by descending confidence, without any cutoff.
pub fn rank(conditions: &FarmConditions, crops: &[CropProfile]) -> Vec<CropScore> {
    let mut scores: Vec<CropScore> = crops.iter().map(|c| score_crop(conditions, c)).collect();
    // sort_by is stable, so equal confidences stay in catalog order
    scores.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    scores
}

/// Apply the cutoff and the result limit to an already ranked list.
pub fn select_recommendations(ranked: &[CropScore]) -> Vec<Recommendation> {
    ranked
        .iter()
        .filter(|s| passes_cutoff(s.confidence))
        .take(MAX_RECOMMENDATIONS)
        .map(Recommendation::from)
        .collect()
}

/// Score a single crop on all factors.
pub fn score_crop(conditions: &FarmConditions, profile: &CropProfile) -> CropScore {
    let factors = vec![
        score_ph(conditions, profile),
        score_npk(conditions, profile),
        score_temperature(conditions, profile),
        score_rainfall(conditions, profile),
        score_humidity(conditions, profile),
        score_region(conditions, profile),
    ];
    let raw_score: u32 = factors.iter().map(|f| f.points).sum();
    let confidence = confidence_from_raw(raw_score);

    tracing::debug!(
        "Scored {}: raw {} -> confidence {}",
        profile.name,
        raw_score,
        confidence.round_dp(2)
    );

    CropScore {
        name: profile.name.clone(),
        description: profile.description.clone(),
        raw_score,
        confidence,
        factors,
    }
}

/// Normalize a raw score: round, divide by 1.1, clamp to 100.
pub fn confidence_from_raw(raw_score: u32) -> Decimal {
    let divisor = Decimal::new(i64::from(CONFIDENCE_DIVISOR_TENTHS), 1);
    let confidence = Decimal::from(raw_score).round() / divisor;
    confidence.min(Decimal::from(CONFIDENCE_CEILING))
}

/// Whether a confidence is high enough to be recommended (strictly above 40).
pub fn passes_cutoff(confidence: Decimal) -> bool {
    confidence > Decimal::from(MIN_CONFIDENCE)
}

pub fn score_ph(conditions: &FarmConditions, profile: &CropProfile) -> FactorScore {
    let ph = conditions.soil_ph;
    let (min, max) = (profile.ph_min, profile.ph_max);

    let (points, reason) = if in_range(ph, min, max) {
        (PH_MAX_POINTS, format!("pH {} within {}-{}", ph, min, max))
    } else {
        let distance = nearest_distance(ph, min, max);
        let points = if distance < Decimal::from(PH_NEAR_DISTANCE) {
            PH_NEAR_POINTS
        } else if distance < Decimal::from(PH_FAR_DISTANCE) {
            PH_FAR_POINTS
        } else {
            0
        };
        (
            points,
            format!("pH {} is {} outside {}-{}", ph, distance, min, max),
        )
    };

    FactorScore {
        factor: Factor::SoilPh,
        points,
        max_points: PH_MAX_POINTS,
        reason,
    }
}

pub fn score_npk(conditions: &FarmConditions, profile: &CropProfile) -> FactorScore {
    let nutrients = [
        ("N", conditions.nitrogen, profile.nitrogen_min),
        ("P", conditions.phosphorus, profile.phosphorus_min),
        ("K", conditions.potassium, profile.potassium_min),
    ];

    if nutrients.iter().all(|(_, value, min)| value >= min) {
        return FactorScore {
            factor: Factor::Npk,
            points: NPK_MAX_POINTS,
            max_points: NPK_MAX_POINTS,
            reason: format!(
                "N {}, P {}, K {} meet minimums {}/{}/{}",
                conditions.nitrogen,
                conditions.phosphorus,
                conditions.potassium,
                profile.nitrogen_min,
                profile.phosphorus_min,
                profile.potassium_min
            ),
        };
    }

    let mut points = 0;
    let mut parts = Vec::with_capacity(nutrients.len());
    for (label, value, min) in nutrients {
        let p = nutrient_points(value, min);
        points += p;
        parts.push(format!("{} {} (min {}): {}", label, value, min, p));
    }

    FactorScore {
        factor: Factor::Npk,
        points,
        max_points: NPK_MAX_POINTS,
        reason: parts.join(", "),
    }
}

/// Partial NPK credit for one nutrient.
pub fn nutrient_points(value: Decimal, min: Decimal) -> u32 {
    let partial_ratio = Decimal::new(i64::from(NUTRIENT_PARTIAL_RATIO_TENTHS), 1);
    if value >= min {
        NUTRIENT_MET_POINTS
    } else if value >= min.saturating_mul(partial_ratio) {
        NUTRIENT_PARTIAL_POINTS
    } else {
        0
    }
}

pub fn score_temperature(conditions: &FarmConditions, profile: &CropProfile) -> FactorScore {
    let (points, reason) = score_with_near_credit(
        conditions.temperature,
        profile.temp_min,
        profile.temp_max,
        TEMPERATURE_MAX_POINTS,
        TEMPERATURE_NEAR_DISTANCE,
        TEMPERATURE_NEAR_POINTS,
        "°C",
    );
    FactorScore {
        factor: Factor::Temperature,
        points,
        max_points: TEMPERATURE_MAX_POINTS,
        reason,
    }
}

pub fn score_rainfall(conditions: &FarmConditions, profile: &CropProfile) -> FactorScore {
    let (points, reason) = score_with_near_credit(
        conditions.rainfall,
        profile.rainfall_min,
        profile.rainfall_max,
        RAINFALL_MAX_POINTS,
        RAINFALL_NEAR_DISTANCE,
        RAINFALL_NEAR_POINTS,
        "mm",
    );
    FactorScore {
        factor: Factor::Rainfall,
        points,
        max_points: RAINFALL_MAX_POINTS,
        reason,
    }
}

pub fn score_humidity(conditions: &FarmConditions, profile: &CropProfile) -> FactorScore {
    let humidity = conditions.humidity;
    let (min, max) = (profile.humidity_min, profile.humidity_max);

    let (points, reason) = if in_range(humidity, min, max) {
        (
            HUMIDITY_MAX_POINTS,
            format!("{}% within {}-{}%", humidity, min, max),
        )
    } else {
        (0, format!("{}% outside {}-{}%", humidity, min, max))
    };

    FactorScore {
        factor: Factor::Humidity,
        points,
        max_points: HUMIDITY_MAX_POINTS,
        reason,
    }
}

pub fn score_region(conditions: &FarmConditions, profile: &CropProfile) -> FactorScore {
    let (points, reason) = if profile.regions.contains(conditions.region.as_str()) {
        (
            REGION_BONUS_POINTS,
            format!("'{}' is a suitable region", conditions.region),
        )
    } else {
        let regions: Vec<&str> = profile.regions.iter().map(String::as_str).collect();
        (
            0,
            format!(
                "'{}' not among suitable regions ({})",
                conditions.region,
                regions.join(", ")
            ),
        )
    };

    FactorScore {
        factor: Factor::Region,
        points,
        max_points: REGION_BONUS_POINTS,
        reason,
    }
}

/// Full points inside [min, max], near credit within `near_distance` (exclusive)
/// of the closest bound, nothing beyond.
fn score_with_near_credit(
    value: Decimal,
    min: Decimal,
    max: Decimal,
    max_points: u32,
    near_distance: u32,
    near_points: u32,
    unit: &str,
) -> (u32, String) {
    if in_range(value, min, max) {
        return (
            max_points,
            format!("{} {} within {}-{} {}", value, unit, min, max, unit),
        );
    }

    let distance = nearest_distance(value, min, max);
    let points = if distance < Decimal::from(near_distance) {
        near_points
    } else {
        0
    };
    (
        points,
        format!(
            "{} {} is {} {} outside {}-{} {}",
            value, unit, distance, unit, min, max, unit
        ),
    )
}

fn in_range(value: Decimal, min: Decimal, max: Decimal) -> bool {
    min <= value && value <= max
}

/// Distance from `value` to the closer of the two bounds.
fn nearest_distance(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    let to_min = value.saturating_sub(min).abs();
    let to_max = value.saturating_sub(max).abs();
    to_min.min(to_max)
}
