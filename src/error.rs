//! HTTP-facing error type and its JSON envelope.
//!
//! Form-rule failures are not errors: they travel as
//! [`crate::domain::entities::ValidationOutcome`]. `AppError` covers
//! malformed requests and service conditions.

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload embedded in responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The body could not be read as the expected JSON or form payload.
    #[error("{message}")]
    Malformed { status: StatusCode, message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Wraps an extractor rejection.
    ///
    /// `422` is reserved for failed form rules, so undecodable bodies are
    /// reported as `400`; other rejection statuses (`413`, `415`) are kept.
    pub fn malformed(status: StatusCode, message: impl Into<String>) -> Self {
        let status = if status == StatusCode::UNPROCESSABLE_ENTITY {
            StatusCode::BAD_REQUEST
        } else {
            status
        };

        Self::Malformed {
            status,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Malformed { status, .. } => *status,
        }
    }

    /// Converts the error into its response payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Malformed { message, .. } => ErrorInfo {
                code: "malformed_request",
                message: message.clone(),
                details: json!({}),
            },
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::malformed(rejection.status(), rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::malformed(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Malformed { status, message } = &self {
            tracing::debug!(%status, %message, "Rejected request body");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}
