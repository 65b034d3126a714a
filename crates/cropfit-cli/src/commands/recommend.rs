use cropfit_core::catalog::builtin;
use cropfit_core::catalog::schema::Catalog;
use cropfit_core::error::CropfitError;
use cropfit_core::parsing::FormInput;
use std::path::PathBuf;

use crate::output;

/// Form values given on the command line.
#[derive(Debug, Default)]
pub struct FormOverrides {
    pub soil_ph: Option<String>,
    pub nitrogen: Option<String>,
    pub phosphorus: Option<String>,
    pub potassium: Option<String>,
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    pub rainfall: Option<String>,
    pub region: Option<String>,
}

impl FormOverrides {
    fn apply(self, form: &mut FormInput) {
        let pairs = [
            (self.soil_ph, &mut form.soil_ph),
            (self.nitrogen, &mut form.nitrogen),
            (self.phosphorus, &mut form.phosphorus),
            (self.potassium, &mut form.potassium),
            (self.temperature, &mut form.temperature),
            (self.humidity, &mut form.humidity),
            (self.rainfall, &mut form.rainfall),
            (self.region, &mut form.region),
        ];
        for (value, slot) in pairs {
            if let Some(v) = value {
                *slot = v;
            }
        }
    }
}

pub fn run(
    overrides: FormOverrides,
    input_file: Option<PathBuf>,
    catalog_file: Option<PathBuf>,
    preset: &str,
    output_format: &str,
    show_all: bool,
    verbose: bool,
) -> Result<(), CropfitError> {
    let catalog = load_catalog(catalog_file, preset)?;

    // Start from the input file (or the form defaults), then apply flags
    let mut form = match input_file {
        Some(path) => {
            tracing::debug!("Reading form input from {}", path.display());
            let json_bytes = std::fs::read(&path)?;
            serde_json::from_slice(&json_bytes)?
        }
        None => FormInput::default(),
    };
    overrides.apply(&mut form);

    let report = cropfit_core::recommend_form(&form, &catalog)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print(&report, show_all, verbose),
    }

    Ok(())
}

fn load_catalog(catalog_file: Option<PathBuf>, preset: &str) -> Result<Catalog, CropfitError> {
    match catalog_file {
        Some(path) => cropfit_core::catalog::load_catalog(&path),
        None => builtin::load_preset(preset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let mut form = FormInput::default();
        FormOverrides {
            soil_ph: Some("5.2".into()),
            region: Some("hills".into()),
            ..FormOverrides::default()
        }
        .apply(&mut form);

        assert_eq!(form.soil_ph, "5.2");
        assert_eq!(form.region, "hills");
        assert_eq!(form.nitrogen, "50");
    }
}
