//! Handler for the country directory endpoint.

use axum::{Json, extract::State};

use crate::api::dto::countries::CountriesResponse;
use crate::state::AppState;

/// Returns the country selector rows and the directory load status.
///
/// # Endpoint
///
/// `GET /api/countries`
///
/// Always `200 OK`; clients read `status` to show a loading or error
/// affordance instead of an empty selector.
///
/// # Response
///
/// ```json
/// {
///   "status": "ready",
///   "countries": [
///     { "value": "PL", "label": "Poland", "icon_url": "https://flagcdn.com/w80/pl.png" }
///   ]
/// }
/// ```
///
/// A failed load carries the reason:
///
/// ```json
/// {
///   "status": "failed",
///   "countries": [],
///   "error": { "kind": "timeout", "message": "country list request timed out after 10s" }
/// }
/// ```
pub async fn countries_handler(State(state): State<AppState>) -> Json<CountriesResponse> {
    let snapshot = state.country_directory.state();
    Json(CountriesResponse::from(&snapshot))
}
