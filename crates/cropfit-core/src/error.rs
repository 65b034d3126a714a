use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CropfitError {
    #[error("missing value for '{0}'")]
    MissingField(&'static str),

    #[error("invalid number '{value}' for '{field}': {reason}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// `max` is `None` for fields with only a lower bound.
    #[error("'{field}' must be {}, got {value}", describe_bounds(.min, .max))]
    OutOfRange {
        field: &'static str,
        value: String,
        min: Decimal,
        max: Option<Decimal>,
    },

    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe_bounds(min: &Decimal, max: &Option<Decimal>) -> String {
    match max {
        Some(max) => format!("between {} and {}", min, max),
        None => format!("at least {}", min),
    }
}
