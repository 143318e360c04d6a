//! Handler for registration validation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::registration::{RegistrationRequest, RegistrationResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Validates a registration draft.
///
/// # Endpoint
///
/// `POST /api/registrations/validate`
///
/// Nothing is stored; the draft is checked and discarded.
///
/// # Request Body
///
/// ```json
/// {
///   "first_name": "Anna",
///   "last_name": "Nowak",
///   "email": "anna@example.com",
///   "password": "Abcdef12",
///   "confirm_password": "Abcdef12",
///   "age": 25,
///   "birth_date": "1999-05-17",
///   "gender": "Female",
///   "country": "PL",
///   "marketing_consent": false,
///   "terms_accepted": true
/// }
/// ```
///
/// # Response
///
/// `200 OK` when every rule passed:
///
/// ```json
/// { "ok": true, "message": "Formularz jest poprawny", "failures": [] }
/// ```
///
/// `422 Unprocessable Entity` otherwise, failures in rule order:
///
/// ```json
/// {
///   "ok": false,
///   "failures": [
///     { "field": "age", "message": "Nieprawidłowy wiek" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON draft or a field
/// exceeds its length limit.
pub async fn validate_registration_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegistrationResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let draft = payload.into_draft();
    let outcome = state.registration_service.submit(&draft);

    let status = if outcome.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    Ok((status, Json(outcome.into())))
}
