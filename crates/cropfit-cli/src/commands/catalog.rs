use cropfit_core::catalog::builtin;
use cropfit_core::catalog::schema::Catalog;
use cropfit_core::error::CropfitError;
use cropfit_core::model::{is_known_region, KNOWN_REGIONS};
use cropfit_core::score::weights::*;
use std::path::Path;

pub fn list() -> Result<(), CropfitError> {
    println!("Available built-in catalogs:\n");
    for name in builtin::PRESETS {
        let catalog = builtin::load_preset(name)?;
        println!(
            "  {:<10} {} (v{}, {} crops)",
            name,
            catalog.name,
            catalog.version,
            catalog.crops.len()
        );
        if let Some(ref desc) = catalog.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), CropfitError> {
    let catalog = builtin::load_preset(preset)?;

    println!("{} (version {})\n", catalog.name, catalog.version);

    if let Some(ref desc) = catalog.description {
        println!("{}\n", desc);
    }

    println!(
        "Each crop is scored out of {} points: soil pH {}, NPK {}, temperature {},",
        MAX_RAW_SCORE, PH_MAX_POINTS, NPK_MAX_POINTS, TEMPERATURE_MAX_POINTS
    );
    println!(
        "rainfall {}, humidity {} and a {}-point region bonus. Crops scoring above",
        RAINFALL_MAX_POINTS, HUMIDITY_MAX_POINTS, REGION_BONUS_POINTS
    );
    println!(
        "{}% confidence are recommended, best {} first.\n",
        MIN_CONFIDENCE, MAX_RECOMMENDATIONS
    );

    print_table(&catalog);

    Ok(())
}

fn print_table(catalog: &Catalog) {
    let max_name_len = catalog
        .crops
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(10)
        .max("Crop".len());

    println!(
        "  {:<width$}  {:<9}  {:<11}  {:<7}  {:<9}  {:<7}  Regions",
        "Crop",
        "pH",
        "N/P/K min",
        "°C",
        "Rain mm",
        "RH %",
        width = max_name_len
    );
    println!("  {}", "-".repeat(max_name_len + 70));

    for crop in &catalog.crops {
        let regions: Vec<&str> = crop.regions.iter().map(String::as_str).collect();
        println!(
            "  {:<width$}  {:<9}  {:<11}  {:<7}  {:<9}  {:<7}  {}",
            crop.name,
            format!("{}-{}", crop.ph_min, crop.ph_max),
            format!(
                "{}/{}/{}",
                crop.nitrogen_min, crop.phosphorus_min, crop.potassium_min
            ),
            format!("{}-{}", crop.temp_min, crop.temp_max),
            format!("{}-{}", crop.rainfall_min, crop.rainfall_max),
            format!("{}-{}", crop.humidity_min, crop.humidity_max),
            regions.join(", "),
            width = max_name_len
        );
    }

    println!();
}

pub fn schema() -> Result<(), CropfitError> {
    print!(
        r#"Crop Catalog Schema
===================

A catalog file lists the crops that `cropfit recommend` ranks. Every crop
is scored against the farm's conditions and the best matches are returned.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  description   (string, optional)  What this catalog is for
  version       (string, required)  Version identifier (e.g., "2024.1")
  crops         (array, required)   List of crop profiles (see below).
                                    May be empty.

Each crop in the "crops" array (all fields required unless noted):
  name          (string)  Crop name, unique within the catalog
  description   (string)  Shown next to the recommendation
  phMin, phMax  (string)  Acceptable soil pH range, inclusive
  nitrogenMin, phosphorusMin, potassiumMin
                (string)  Minimum soil nutrient levels (ppm)
  tempMin, tempMax
                (string)  Acceptable temperature range (°C), inclusive
  rainfallMin, rainfallMax
                (string)  Acceptable monthly rainfall (mm), inclusive
  humidityMin, humidityMax
                (string)  Acceptable relative humidity (%), inclusive
  regions       (array, optional)
                          Region tags earning the region bonus.
                          Standard tags: {regions}

Every *Min must be less than or equal to its *Max.

Example:
{{
  "name": "Smallholder vegetables",
  "version": "1.0",
  "crops": [
    {{
      "name": "Okra",
      "description": "Heat-loving pod vegetable",
      "phMin": "6.0", "phMax": "7.5",
      "nitrogenMin": "40", "phosphorusMin": "30", "potassiumMin": "30",
      "tempMin": "22", "tempMax": "35",
      "rainfallMin": "60", "rainfallMax": "150",
      "humidityMin": "50", "humidityMax": "80",
      "regions": ["plains", "delta"]
    }}
  ]
}}

Note: numeric values must be quoted strings, not bare numbers,
to preserve exact decimal precision (e.g., "6.5" not 6.5).
"#,
        regions = KNOWN_REGIONS.join(", ")
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), CropfitError> {
    let catalog = cropfit_core::catalog::load_catalog(file)?;

    println!(
        "Catalog '{}' (v{}) is valid.",
        catalog.name, catalog.version
    );
    println!("  Crops: {}", catalog.crops.len());

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    if catalog.crops.is_empty() {
        warnings.push("catalog has no crops; every recommendation will be empty".to_string());
    }
    for crop in &catalog.crops {
        if crop.regions.is_empty() {
            warnings.push(format!(
                "crop '{}' lists no regions and can never earn the region bonus",
                crop.name
            ));
        }
        for region in &crop.regions {
            if !is_known_region(region) {
                warnings.push(format!(
                    "crop '{}' uses non-standard region '{}'",
                    crop.name, region
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
