/*
 * Responsibility
 * - Walk request/response wire records
 * - format-level checks only; the handler resolves the two references
 *   against the store and merges those errors into the same 400
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkRequest {
    pub name: String,
    pub description: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl AddWalkRequest {
    pub fn field_errors(&self) -> Vec<FieldError> {
        walk_field_errors(&self.name, self.length)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkRequest {
    pub name: String,
    pub description: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl UpdateWalkRequest {
    pub fn field_errors(&self) -> Vec<FieldError> {
        walk_field_errors(&self.name, self.length)
    }
}

fn walk_field_errors(name: &str, length: f64) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(FieldError::new("Name", "Name is required."));
    }
    if !(length > 0.0) {
        errors.push(FieldError::new(
            "Length",
            "Length must be greater than zero.",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_request_has_no_field_errors() {
        let req = AddWalkRequest {
            name: "Tongariro Crossing".to_string(),
            description: "Alpine crossing past the Emerald Lakes".to_string(),
            length: 19.4,
            region_id: Uuid::new_v4(),
            walk_difficulty_id: Uuid::new_v4(),
        };

        assert!(req.field_errors().is_empty());
    }

    #[test]
    fn blank_name_and_non_positive_length_accumulate() {
        let req = AddWalkRequest {
            name: "".to_string(),
            description: "desc".to_string(),
            length: 0.0,
            region_id: Uuid::new_v4(),
            walk_difficulty_id: Uuid::new_v4(),
        };

        let fields: Vec<&str> = req.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["Name", "Length"]);
    }
}
