/*
 * Responsibility
 * - application-wide AppError and its HTTP mapping
 * - JSON error envelope; validation failures carry every violated field
 * - not-found responds with status only (empty body)
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

/// One violated field with its message. The `field` key follows the wire
/// record's PascalCase member name (`Code`, `RegionId`, ...).
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    // One message for every login failure cause.
    #[error("Username or Password is incorrect")]
    InvalidCredentials,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("{}", .0.message)]
    Conflict(FieldError),

    #[error("internal server error")]
    Internal,
}

impl AppError {
    /// 400 for a body that could not be read as the expected wire record.
    pub fn malformed_body() -> Self {
        Self::Validation(vec![FieldError::new(
            "Request",
            "The request body is missing or malformed.",
        )])
    }
}

#[derive(Serialize)]
struct ErrorResponseBody {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, code, errors) = match self {
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", errors),
            AppError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "INVALID_CREDENTIALS", Vec::new())
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", Vec::new()),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN", Vec::new()),
            // Absence is signalled by the status alone.
            AppError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            AppError::Conflict(field) => (StatusCode::CONFLICT, "CONFLICT", vec![field]),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                Vec::new(),
            ),
        };

        let body = ErrorResponseBody {
            error: ErrorBody {
                code,
                message,
                errors,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Db(e) => {
                tracing::error!(error = %e, "storage failure");
                AppError::Internal
            }
        }
    }
}
