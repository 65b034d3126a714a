pub mod catalog;
pub mod error;
pub mod model;
pub mod parsing;
pub mod score;
pub mod trace;

use catalog::schema::Catalog;
use error::CropfitError;
use model::FarmConditions;
use parsing::FormInput;
use score::{CropScore, Recommendation};
use serde::{Deserialize, Serialize};
use trace::TraceBundle;

pub use score::recommend;

/// Result of running a form through parsing and scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Name of the catalog the crops were ranked against.
    pub catalog: String,
    pub conditions: FarmConditions,
    /// Best matches, highest confidence first (at most five).
    pub recommendations: Vec<Recommendation>,
    /// Every crop with its factor breakdown, in rank order.
    pub ranked: Vec<CropScore>,
    pub trace: TraceBundle,
}

/// Main API entry point: parse a form and rank the catalog against it.
///
/// Only the parsing stage can fail; scoring is total.
pub fn recommend_form(
    form: &FormInput,
    catalog: &Catalog,
) -> Result<RecommendationReport, CropfitError> {
    let conditions = parsing::parse_form(form)?;

    let ranked = score::rank(&conditions, &catalog.crops);
    let recommendations = score::select_recommendations(&ranked);

    tracing::info!(
        "Ranked {} crops from '{}': {} recommended",
        ranked.len(),
        catalog.name,
        recommendations.len()
    );

    let trace = TraceBundle {
        entries: trace::build_entry_traces(form, &conditions),
        decisions: trace::build_crop_decisions(&ranked),
        warnings: trace::build_warnings(&conditions, &catalog.crops, recommendations.len()),
        ..TraceBundle::default()
    };

    Ok(RecommendationReport {
        catalog: catalog.name.clone(),
        conditions,
        recommendations,
        ranked,
        trace,
    })
}
