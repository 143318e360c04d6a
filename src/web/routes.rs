//! Registration page route configuration.

use crate::state::AppState;
use crate::web::handlers::{form_handler, submit_form_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Page routes.
///
/// # Endpoints
///
/// - `GET /` - Empty registration form
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(form_handler))
}

/// Form submission routes, rate limited by the caller.
///
/// # Endpoints
///
/// - `POST /register` - Validate the form and render it with alerts
pub fn submit_routes() -> Router<AppState> {
    Router::new().route("/register", post(submit_form_handler))
}
