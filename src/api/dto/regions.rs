/*
 * Responsibility
 * - Region request/response wire records
 * - validate() collects every violated field before anything is persisted
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRegionRequest {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl AddRegionRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        region_field_errors(&self.code, &self.name, self.area, self.population)
    }
}

/// Update is a full replace, so the field set and rules match Add.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionRequest {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl UpdateRegionRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        region_field_errors(&self.code, &self.name, self.area, self.population)
    }
}

// Lat/long are unconstrained.
fn region_field_errors(
    code: &str,
    name: &str,
    area: f64,
    population: i64,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if code.trim().is_empty() {
        errors.push(FieldError::new("Code", "Code is required."));
    }
    if name.trim().is_empty() {
        errors.push(FieldError::new("Name", "Name is required."));
    }
    if !(area > 0.0) {
        errors.push(FieldError::new("Area", "Area must be greater than zero."));
    }
    if population < 0 {
        errors.push(FieldError::new(
            "Population",
            "Population must be zero or greater.",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AddRegionRequest {
        AddRegionRequest {
            code: "WKO".to_string(),
            name: "Waikato".to_string(),
            area: 1000.0,
            lat: -37.5,
            long: 175.2,
            population: 500_000,
        }
    }

    #[test]
    fn a_valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn every_violated_field_is_reported() {
        let req = AddRegionRequest {
            code: "  ".to_string(),
            name: String::new(),
            area: 0.0,
            lat: -37.5,
            long: 175.2,
            population: -1,
        };

        let errors = req.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

        assert_eq!(fields, vec!["Code", "Name", "Area", "Population"]);
    }

    #[test]
    fn nan_area_is_rejected() {
        let mut req = valid();
        req.area = f64::NAN;

        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "Area");
    }

    #[test]
    fn zero_population_is_allowed() {
        let mut req = valid();
        req.population = 0;

        assert!(req.validate().is_ok());
    }
}
