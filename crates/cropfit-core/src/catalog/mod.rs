pub mod builtin;
pub mod schema;

use crate::error::CropfitError;
use crate::model::normalize_region;
use schema::Catalog;
use std::collections::HashSet;
use std::path::Path;

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CropfitError> {
    let content = std::fs::read_to_string(path).map_err(|e| CropfitError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<Catalog, CropfitError> {
    let mut catalog: Catalog =
        serde_json::from_str(json).map_err(|e| CropfitError::CatalogLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    normalize_regions(&mut catalog);
    validate_catalog(&catalog)?;
    tracing::debug!(
        "Loaded catalog '{}' ({} crops) from {}",
        catalog.name,
        catalog.crops.len(),
        source.display()
    );
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Catalog, CropfitError> {
    let mut catalog: Catalog = serde_json::from_str(json).map_err(CropfitError::Json)?;
    normalize_regions(&mut catalog);
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Region tags are matched against the farm's region after the same
/// trim + lowercase that `parse_form` applies.
fn normalize_regions(catalog: &mut Catalog) {
    for crop in &mut catalog.crops {
        crop.regions = crop.regions.iter().map(|r| normalize_region(r)).collect();
    }
}

/// Validate that a catalog is well-formed.
///
/// An empty crop list is valid: it scores to an empty recommendation list.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CropfitError> {
    let mut seen = HashSet::new();

    for crop in &catalog.crops {
        if crop.name.trim().is_empty() {
            return Err(CropfitError::CatalogInvalid(
                "crop name must not be empty".into(),
            ));
        }

        if !seen.insert(crop.name.as_str()) {
            return Err(CropfitError::CatalogInvalid(format!(
                "duplicate crop '{}'",
                crop.name
            )));
        }

        for (label, min, max) in crop.ranges() {
            if min > max {
                return Err(CropfitError::CatalogInvalid(format!(
                    "crop '{}' has {}Min {} greater than {}Max {}",
                    crop.name, label, min, label, max
                )));
            }
        }

        if crop.regions.iter().any(|r| r.trim().is_empty()) {
            return Err(CropfitError::CatalogInvalid(format!(
                "crop '{}' has an empty region tag",
                crop.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"{
        "name": "Test",
        "version": "1.0",
        "crops": [
            {
                "name": "Rice",
                "description": "Staple grain",
                "phMin": "5.5", "phMax": "7.0",
                "nitrogenMin": "60", "phosphorusMin": "30", "potassiumMin": "30",
                "tempMin": "22", "tempMax": "32",
                "rainfallMin": "150", "rainfallMax": "300",
                "humidityMin": "70", "humidityMax": "90",
                "regions": ["delta", "coastal"]
            }
        ]
    }"#;

    #[test]
    fn test_parse_valid_catalog() {
        let catalog = parse_catalog_str(VALID).unwrap();
        assert_eq!(catalog.name, "Test");
        assert_eq!(catalog.crops.len(), 1);
        assert!(catalog.crops[0].regions.contains("delta"));
    }

    #[test]
    fn test_empty_crop_list_accepted() {
        let json = r#"{ "name": "Empty", "version": "1.0", "crops": [] }"#;
        let catalog = parse_catalog_str(json).unwrap();
        assert!(catalog.crops.is_empty());
    }

    #[test]
    fn test_duplicate_crop_rejected() {
        let mut catalog = parse_catalog_str(VALID).unwrap();
        catalog.crops.push(catalog.crops[0].clone());
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("duplicate crop 'Rice'"));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let json = VALID.replace(r#""tempMin": "22""#, r#""tempMin": "40""#);
        let err = parse_catalog_str(&json).unwrap_err();
        assert!(err.to_string().contains("tempMin"));
    }

    #[test]
    fn test_empty_region_rejected() {
        let json = VALID.replace(r#"["delta", "coastal"]"#, r#"["delta", " "]"#);
        assert!(parse_catalog_str(&json).is_err());
    }

    #[test]
    fn test_region_tags_normalized_on_load() {
        let json = VALID.replace(r#"["delta", "coastal"]"#, r#"["Delta ", "COASTAL", "delta"]"#);
        let catalog = parse_catalog_str(&json).unwrap();
        let regions: Vec<&str> = catalog.crops[0].regions.iter().map(String::as_str).collect();
        assert_eq!(regions, vec!["coastal", "delta"]);
    }

    #[test]
    fn test_capitalized_region_tag_earns_bonus() {
        let json = r#"{
            "name": "Custom",
            "version": "1",
            "crops": [{
                "name": "Sorghum",
                "description": "Dryland grain",
                "phMin": "5.5", "phMax": "7.5",
                "nitrogenMin": "40", "phosphorusMin": "30", "potassiumMin": "30",
                "tempMin": "20", "tempMax": "35",
                "rainfallMin": "100", "rainfallMax": "200",
                "humidityMin": "50", "humidityMax": "80",
                "regions": ["Plains"]
            }]
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let catalog = load_catalog(file.path()).unwrap();

        let form = crate::parsing::FormInput {
            region: "Plains".into(),
            ..Default::default()
        };
        let report = crate::recommend_form(&form, &catalog).unwrap();
        assert_eq!(report.recommendations[0].confidence, rust_decimal::Decimal::ONE_HUNDRED);
        assert!(report.trace.warnings.is_empty());
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = VALID.replace(r#""phMin": "5.5", "#, "");
        assert!(parse_catalog_str(&json).is_err());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.crops[0].name, "Rice");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        match load_catalog(&path) {
            Err(CropfitError::CatalogLoad { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected CatalogLoad, got {other:?}"),
        }
    }
}
