use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// A single field-level validation failure, keyed by the JSON field name
/// the client submitted.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FieldError {
    /// Offending field, in the request's camelCase spelling.
    #[schema(example = "finderEmail")]
    pub field: &'static str,
    /// Human-readable problem description.
    #[schema(example = "Valid email is required")]
    pub message: String,
}

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`,
    /// `UPLOAD_REJECTED`, `SESSION_MISSING`, `SESSION_INVALID`,
    /// `INVALID_CREDENTIALS`, `PERMISSION_DENIED`, `NOT_FOUND`,
    /// `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Invalid dog report")]
    pub message: String,
    /// Per-field detail, present only for report validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    /// Report validation failure with per-field detail for form re-display.
    FieldValidation(Vec<FieldError>),
    UploadRejected(String),
    SessionMissing,
    SessionInvalid,
    InvalidCredentials,
    PermissionDenied,
    NotFound(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                    errors: None,
                },
            ),
            AppError::FieldValidation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: "Invalid dog report".into(),
                    errors: Some(errors),
                },
            ),
            AppError::UploadRejected(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "UPLOAD_REJECTED",
                    message: msg,
                    errors: None,
                },
            ),
            AppError::SessionMissing => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    code: "SESSION_MISSING",
                    message: "Authentication required".into(),
                    errors: None,
                },
            ),
            AppError::SessionInvalid => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    code: "SESSION_INVALID",
                    message: "Invalid or expired session".into(),
                    errors: None,
                },
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    code: "INVALID_CREDENTIALS",
                    message: "Invalid username or password".into(),
                    errors: None,
                },
            ),
            AppError::PermissionDenied => (
                StatusCode::FORBIDDEN,
                ErrorBody {
                    code: "PERMISSION_DENIED",
                    message: "Insufficient permissions".into(),
                    errors: None,
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    code: "NOT_FOUND",
                    message: msg,
                    errors: None,
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
                        errors: None,
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
