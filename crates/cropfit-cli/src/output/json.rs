use cropfit_core::error::CropfitError;
use cropfit_core::RecommendationReport;

pub fn print(report: &RecommendationReport) -> Result<(), CropfitError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
