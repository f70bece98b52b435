/*
 * Responsibility
 * - WalkDifficulty request/response wire records
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyResponse {
    pub id: Uuid,
    pub code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkDifficultyRequest {
    pub code: String,
}

impl AddWalkDifficultyRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        code_field_errors(&self.code)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkDifficultyRequest {
    pub code: String,
}

impl UpdateWalkDifficultyRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        code_field_errors(&self.code)
    }
}

fn code_field_errors(code: &str) -> Result<(), Vec<FieldError>> {
    if code.trim().is_empty() {
        Err(vec![FieldError::new("Code", "Code is required.")])
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_code_passes() {
        let req = AddWalkDifficultyRequest {
            code: "Easy".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn blank_code_is_reported() {
        let req = AddWalkDifficultyRequest {
            code: " ".to_string(),
        };

        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "Code");
    }
}
