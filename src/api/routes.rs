//! API route configuration.

use crate::api::handlers::{countries_handler, validate_registration_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only API routes.
///
/// # Endpoints
///
/// - `GET  /countries` - Country selector rows and directory status
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/countries", get(countries_handler))
}

/// Submission routes, rate limited by the caller.
///
/// # Endpoints
///
/// - `POST /registrations/validate` - Validate a registration draft
pub fn submit_routes() -> Router<AppState> {
    Router::new().route("/registrations/validate", post(validate_registration_handler))
}
