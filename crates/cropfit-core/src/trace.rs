use crate::catalog::schema::CropProfile;
use crate::model::{is_known_region, FarmConditions};
use crate::parsing::FormInput;
use crate::score::engine::passes_cutoff;
use crate::score::weights::MAX_RECOMMENDATIONS;
use crate::score::CropScore;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSeverity {
    Important,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceVisibility {
    Always,
    Auto,
    OnDemand,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    ParseValue,
    NormalizeRegion,
    FactorScore,
    CutoffCheck,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub step_type: TraceStepType,
    pub message: String,
}

/// How one form field was turned into a typed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEntry {
    pub entry_id: String,
    pub field: String,
    pub raw_value: String,
    pub parsed_value: String,
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TraceOutcome {
    Recommended { rank: usize },
    BelowCutoff,
    Truncated,
}

/// How one crop was scored and whether it made the final list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDecision {
    pub decision_id: String,
    pub crop: String,
    pub raw_score: u32,
    pub confidence: Decimal,
    pub outcome: TraceOutcome,
    pub reason: String,
    pub severity: TraceSeverity,
    pub visibility: TraceVisibility,
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceWarning {
    pub message: String,
    pub severity: TraceSeverity,
    pub visibility: TraceVisibility,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceBundle {
    pub trace_schema_version: String,
    pub entries: Vec<TraceEntry>,
    pub decisions: Vec<TraceDecision>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TraceWarning>,
}

impl Default for TraceBundle {
    fn default() -> Self {
        Self {
            trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
            entries: Vec::new(),
            decisions: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

pub fn build_entry_traces(form: &FormInput, conditions: &FarmConditions) -> Vec<TraceEntry> {
    let parsed = [
        conditions.soil_ph,
        conditions.nitrogen,
        conditions.phosphorus,
        conditions.potassium,
        conditions.temperature,
        conditions.humidity,
        conditions.rainfall,
    ];

    let mut entries: Vec<TraceEntry> = form
        .numeric_fields()
        .into_iter()
        .zip(parsed)
        .enumerate()
        .map(|(idx, ((field, raw, _), value))| TraceEntry {
            entry_id: format!("ent_{}", idx),
            field: field.to_string(),
            raw_value: raw.to_string(),
            parsed_value: value.to_string(),
            steps: vec![TraceStep {
                step_type: TraceStepType::ParseValue,
                message: format!("Parsed '{}' as {}", raw.trim(), value),
            }],
        })
        .collect();

    entries.push(TraceEntry {
        entry_id: format!("ent_{}", entries.len()),
        field: "region".to_string(),
        raw_value: form.region.clone(),
        parsed_value: conditions.region.clone(),
        steps: vec![TraceStep {
            step_type: TraceStepType::NormalizeRegion,
            message: format!("Normalized '{}' -> '{}'", form.region, conditions.region),
        }],
    });

    entries
}

/// One decision per ranked crop, in rank order.
pub fn build_crop_decisions(ranked: &[CropScore]) -> Vec<TraceDecision> {
    let mut recommended = 0;

    ranked
        .iter()
        .enumerate()
        .map(|(idx, score)| {
            let (outcome, reason, severity, visibility) = if !passes_cutoff(score.confidence) {
                (
                    TraceOutcome::BelowCutoff,
                    format!(
                        "Confidence {} is not above the cutoff",
                        score.confidence.round_dp(1)
                    ),
                    TraceSeverity::Info,
                    TraceVisibility::OnDemand,
                )
            } else if recommended < MAX_RECOMMENDATIONS {
                recommended += 1;
                (
                    TraceOutcome::Recommended { rank: recommended },
                    format!(
                        "Ranked #{} with confidence {}",
                        recommended,
                        score.confidence.round_dp(1)
                    ),
                    TraceSeverity::Important,
                    TraceVisibility::Always,
                )
            } else {
                (
                    TraceOutcome::Truncated,
                    format!(
                        "Confidence {} passed the cutoff but {} crops ranked higher",
                        score.confidence.round_dp(1),
                        MAX_RECOMMENDATIONS
                    ),
                    TraceSeverity::Info,
                    TraceVisibility::Auto,
                )
            };

            let mut steps: Vec<TraceStep> = score
                .factors
                .iter()
                .map(|f| TraceStep {
                    step_type: TraceStepType::FactorScore,
                    message: format!("{}: {}/{} ({})", f.factor, f.points, f.max_points, f.reason),
                })
                .collect();
            steps.push(TraceStep {
                step_type: TraceStepType::CutoffCheck,
                message: format!(
                    "Raw {} -> confidence {}",
                    score.raw_score,
                    score.confidence.round_dp(2)
                ),
            });

            TraceDecision {
                decision_id: format!("dec_{}", idx),
                crop: score.name.clone(),
                raw_score: score.raw_score,
                confidence: score.confidence,
                outcome,
                reason,
                severity,
                visibility,
                steps,
            }
        })
        .collect()
}

pub fn build_warnings(
    conditions: &FarmConditions,
    crops: &[CropProfile],
    recommended: usize,
) -> Vec<TraceWarning> {
    let mut warnings = Vec::new();

    if crops.is_empty() {
        warnings.push(TraceWarning {
            message: "Catalog has no crops".to_string(),
            severity: TraceSeverity::Important,
            visibility: TraceVisibility::Always,
        });
    } else if !crops
        .iter()
        .any(|c| c.regions.contains(conditions.region.as_str()))
    {
        let message = if is_known_region(&conditions.region) {
            format!("No crop in the catalog lists region '{}'", conditions.region)
        } else {
            format!(
                "Region '{}' is not a standard region and no crop lists it",
                conditions.region
            )
        };
        warnings.push(TraceWarning {
            message,
            severity: TraceSeverity::Important,
            visibility: TraceVisibility::Auto,
        });
    }

    if recommended == 0 && !crops.is_empty() {
        warnings.push(TraceWarning {
            message: "No crop scored above the confidence cutoff".to_string(),
            severity: TraceSeverity::Important,
            visibility: TraceVisibility::Always,
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_form;
    use crate::score::outcome::{Factor, FactorScore};

    fn crop_score(name: &str, raw_score: u32) -> CropScore {
        CropScore {
            name: name.into(),
            description: String::new(),
            raw_score,
            confidence: crate::score::engine::confidence_from_raw(raw_score),
            factors: vec![FactorScore {
                factor: Factor::Region,
                points: 10,
                max_points: 10,
                reason: "'plains' is a suitable region".into(),
            }],
        }
    }

    #[test]
    fn test_entry_traces_cover_all_fields() {
        let form = FormInput {
            soil_ph: "6,5".into(),
            region: " Plains".into(),
            ..FormInput::default()
        };
        let conditions = parse_form(&form).unwrap();
        let entries = build_entry_traces(&form, &conditions);
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].field, "soilPh");
        assert_eq!(entries[0].raw_value, "6,5");
        assert_eq!(entries[0].parsed_value, "6.5");
        assert_eq!(entries[7].parsed_value, "plains");
    }

    #[test]
    fn test_decision_outcomes() {
        let mut ranked: Vec<CropScore> = (0..6).map(|i| crop_score(&format!("C{i}"), 100)).collect();
        ranked.push(crop_score("Low", 40));
        let decisions = build_crop_decisions(&ranked);

        assert!(matches!(decisions[0].outcome, TraceOutcome::Recommended { rank: 1 }));
        assert!(matches!(decisions[4].outcome, TraceOutcome::Recommended { rank: 5 }));
        assert!(matches!(decisions[5].outcome, TraceOutcome::Truncated));
        assert!(matches!(decisions[6].outcome, TraceOutcome::BelowCutoff));
        assert_eq!(decisions[0].steps.len(), 2);
    }

    #[test]
    fn test_warnings_for_empty_catalog() {
        let conditions = parse_form(&FormInput::default()).unwrap();
        let warnings = build_warnings(&conditions, &[], 0);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no crops"));
    }
}
