use crate::catalog::parse_catalog_str;
use crate::catalog::schema::Catalog;
use crate::error::CropfitError;

const STANDARD_CROPS_JSON: &str = include_str!("../../../../catalog/standard-crops.json");

/// Available built-in catalogs.
pub const PRESETS: &[&str] = &["standard"];

/// Catalog used when neither a preset nor a catalog file is given.
pub const DEFAULT_PRESET: &str = "standard";

/// Load a built-in catalog by name.
pub fn load_preset(name: &str) -> Result<Catalog, CropfitError> {
    match name {
        "standard" => parse_catalog_str(STANDARD_CROPS_JSON),
        _ => Err(CropfitError::CatalogInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
