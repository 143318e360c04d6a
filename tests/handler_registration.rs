mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use registration_form::api::handlers::validate_registration_handler;
use registration_form::application::services::CountryDirectory;
use registration_form::domain::entities::messages;
use registration_form::domain::validation::BirthDatePolicy;
use registration_form::state::AppState;
use serde_json::json;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/registrations/validate", post(validate_registration_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_validate_complete_registration() {
    let server = test_server(common::create_test_state());

    let response = server
        .post("/api/registrations/validate")
        .json(&common::valid_registration())
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ok"], true);
    assert_eq!(json["message"], messages::FORM_VALID);
    assert_eq!(json["failures"], json!([]));
}

#[tokio::test]
async fn test_validate_empty_draft_reports_rules_in_order() {
    let server = test_server(common::create_test_state());

    let response = server
        .post("/api/registrations/validate")
        .json(&json!({}))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ok"], false);
    assert!(json.get("message").is_none());

    let fields: Vec<&str> = json["failures"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec![
            "first_name",
            "last_name",
            "email",
            "password",
            "age",
            "terms_accepted",
            "gender",
            "country"
        ]
    );
}

#[tokio::test]
async fn test_validate_password_mismatch() {
    let server = test_server(common::create_test_state());

    let mut body = common::valid_registration();
    body["confirm_password"] = json!("Abcdef13");

    let response = server.post("/api/registrations/validate").json(&body).await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["failures"].as_array().unwrap().len(), 1);
    assert_eq!(json["failures"][0]["field"], "confirm_password");
    assert_eq!(json["failures"][0]["message"], messages::PASSWORD_MISMATCH);
}

#[tokio::test]
async fn test_validate_accepts_camel_case_and_string_age() {
    let server = test_server(common::create_test_state());

    let response = server
        .post("/api/registrations/validate")
        .json(&json!({
            "firstName": "Anna",
            "lastName": "Nowak",
            "email": "anna@example.com",
            "password": "Abcdef12",
            "confirmPassword": "Abcdef12",
            "age": "25",
            "birthDate": "",
            "gender": "Female",
            "country": "PL",
            "termsAccepted": true
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["ok"], true);
}

#[tokio::test]
async fn test_validate_age_out_of_range() {
    let server = test_server(common::create_test_state());

    for age in [json!(17), json!(100), json!("abc"), json!(25.5)] {
        let mut body = common::valid_registration();
        body["age"] = age;

        let response = server.post("/api/registrations/validate").json(&body).await;

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["failures"][0]["message"], messages::INVALID_AGE);
    }
}

#[tokio::test]
async fn test_validate_legacy_birth_date_policy_always_fails() {
    let state = common::create_state_with(
        CountryDirectory::ready(common::sample_countries()),
        BirthDatePolicy::Legacy,
    );
    let server = test_server(state);

    let response = server
        .post("/api/registrations/validate")
        .json(&common::valid_registration())
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["failures"][0]["field"], "birth_date");
    assert_eq!(json["failures"][0]["message"], messages::UNDERAGE);
}

#[tokio::test]
async fn test_validate_country_outside_directory_is_accepted() {
    let server = test_server(common::create_test_state());

    let mut body = common::valid_registration();
    body["country"] = json!("XX");

    let response = server.post("/api/registrations/validate").json(&body).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_validate_oversized_field_is_bad_request() {
    let server = test_server(common::create_test_state());

    let mut body = common::valid_registration();
    body["first_name"] = json!("a".repeat(300));

    let response = server.post("/api/registrations/validate").json(&body).await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_validate_malformed_json_is_bad_request() {
    let server = test_server(common::create_test_state());

    let response = server
        .post("/api/registrations/validate")
        .json(&json!({ "terms_accepted": "yes" }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "malformed_request");
}
