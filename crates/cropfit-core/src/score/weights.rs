//! Scoring weights and thresholds.
//!
//! These are empirical tuning constants. The maximum raw score is the sum of
//! the six `*_MAX_POINTS` values.

/// Soil pH inside the crop's range.
pub const PH_MAX_POINTS: u32 = 20;
/// pH within 1 unit of the nearest bound.
pub const PH_NEAR_POINTS: u32 = 15;
pub const PH_NEAR_DISTANCE: u32 = 1;
/// pH within 2 units of the nearest bound.
pub const PH_FAR_POINTS: u32 = 10;
pub const PH_FAR_DISTANCE: u32 = 2;

/// All three nutrient minimums met.
pub const NPK_MAX_POINTS: u32 = 30;
/// Per-nutrient credit when the minimum is met but another nutrient is short.
pub const NUTRIENT_MET_POINTS: u32 = 10;
/// Per-nutrient credit for reaching `NUTRIENT_PARTIAL_RATIO` of the minimum.
pub const NUTRIENT_PARTIAL_POINTS: u32 = 5;
/// Fraction of the minimum, in tenths (7 = 70%).
pub const NUTRIENT_PARTIAL_RATIO_TENTHS: u32 = 7;

pub const TEMPERATURE_MAX_POINTS: u32 = 20;
pub const TEMPERATURE_NEAR_POINTS: u32 = 10;
/// Degrees outside the range that still earn near credit (exclusive).
pub const TEMPERATURE_NEAR_DISTANCE: u32 = 5;

pub const RAINFALL_MAX_POINTS: u32 = 20;
pub const RAINFALL_NEAR_POINTS: u32 = 10;
/// Millimetres outside the range that still earn near credit (exclusive).
pub const RAINFALL_NEAR_DISTANCE: u32 = 20;

/// Humidity has no partial credit.
pub const HUMIDITY_MAX_POINTS: u32 = 10;

pub const REGION_BONUS_POINTS: u32 = 10;

pub const MAX_RAW_SCORE: u32 = PH_MAX_POINTS
    + NPK_MAX_POINTS
    + TEMPERATURE_MAX_POINTS
    + RAINFALL_MAX_POINTS
    + HUMIDITY_MAX_POINTS
    + REGION_BONUS_POINTS;

/// Raw score divisor, in tenths (11 = 1.1).
pub const CONFIDENCE_DIVISOR_TENTHS: u32 = 11;
/// Confidence is clamped to this ceiling. There is no floor clamp.
pub const CONFIDENCE_CEILING: u32 = 100;
/// Crops must score strictly above this confidence to be recommended.
pub const MIN_CONFIDENCE: u32 = 40;
/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 5;
