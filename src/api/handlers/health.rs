//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::application::services::DirectoryState;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Directory loaded or still loading
/// - **503 Service Unavailable**: Directory load failed; the form works but
///   offers no countries
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "country_directory": {
///       "status": "ok",
///       "message": "250 countries loaded"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let directory_check = check_directory(&state.country_directory.state());

    let healthy = directory_check.status != "error";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            country_directory: directory_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Maps the directory state onto a component check.
fn check_directory(state: &DirectoryState) -> CheckStatus {
    match state {
        DirectoryState::Loading => CheckStatus {
            status: "loading".to_string(),
            message: Some("Country list request in flight".to_string()),
        },
        DirectoryState::Ready(records) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} countries loaded", records.len())),
        },
        DirectoryState::Failed(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(e.to_string()),
        },
    }
}
