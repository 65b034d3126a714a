use cropfit_core::score::engine::passes_cutoff;
use cropfit_core::score::outcome::{display_percent, CropScore};
use cropfit_core::score::weights::{MAX_RAW_SCORE, MAX_RECOMMENDATIONS, MIN_CONFIDENCE};
use cropfit_core::RecommendationReport;

pub fn print(report: &RecommendationReport, show_all: bool, verbose: bool) {
    let ranked = &report.ranked;
    let c = &report.conditions;

    println!("=== {} ===\n", report.catalog);
    println!(
        "  Conditions: pH {}, N {}, P {}, K {}, {} °C, {}% humidity, {} mm rainfall, region '{}'\n",
        c.soil_ph, c.nitrogen, c.phosphorus, c.potassium, c.temperature, c.humidity, c.rainfall,
        c.region
    );

    if report.recommendations.is_empty() {
        println!(
            "  No recommendations: no crop scored above {}% for these conditions.\n",
            MIN_CONFIDENCE
        );
    } else {
        let max_name = report
            .recommendations
            .iter()
            .map(|r| r.name.len())
            .max()
            .unwrap_or(10);

        for (i, rec) in report.recommendations.iter().enumerate() {
            println!(
                "  {}. {:<width$}  {:>3}% match  ({})",
                i + 1,
                rec.name,
                rec.display_percent(),
                rec.match_level(),
                width = max_name
            );
            println!("     {}", rec.description);

            if verbose {
                if let Some(score) = ranked.iter().find(|s| s.name == rec.name) {
                    print_factors(score);
                }
            }
            println!();
        }
    }

    if show_all {
        let others: Vec<&CropScore> = ranked
            .iter()
            .filter(|s| !report.recommendations.iter().any(|r| r.name == s.name))
            .collect();

        if !others.is_empty() {
            println!("  Not recommended:");
            let max_name = others.iter().map(|s| s.name.len()).max().unwrap_or(10);
            for score in &others {
                let why = if passes_cutoff(score.confidence) {
                    format!("outside top {}", MAX_RECOMMENDATIONS)
                } else {
                    format!("not above {}%", MIN_CONFIDENCE)
                };
                println!(
                    "    {:<width$}  {:>3}%  (raw {}, {})",
                    score.name,
                    display_percent(score.confidence),
                    score.raw_score,
                    why,
                    width = max_name
                );
                if verbose {
                    print_factors(score);
                }
            }
            println!();
        }
    }

    for w in &report.trace.warnings {
        eprintln!("  warning: {}", w.message);
    }
}

fn print_factors(score: &CropScore) {
    for f in &score.factors {
        println!(
            "       {:<12} {:>2}/{:<2}  {}",
            f.factor.to_string(),
            f.points,
            f.max_points,
            f.reason
        );
    }
    println!(
        "       {:<12} {:>3}/{} -> {}%",
        "Total",
        score.raw_score,
        MAX_RAW_SCORE,
        score.confidence.round_dp(1)
    );
}
