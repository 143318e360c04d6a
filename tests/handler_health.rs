mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use registration_form::api::handlers::health_handler;
use registration_form::domain::repositories::DirectoryError;
use registration_form::domain::validation::BirthDatePolicy;
use registration_form::state::AppState;
use std::time::Duration;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = test_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["country_directory"]["status"], "ok");
    assert_eq!(
        json["checks"]["country_directory"]["message"],
        "3 countries loaded"
    );
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = test_server(common::create_test_state());

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("country_directory").is_some());
}

#[tokio::test]
async fn test_health_loading_directory_is_healthy() {
    let server = test_server(common::create_state_with(
        common::loading_directory(),
        BirthDatePolicy::Off,
    ));

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["checks"]["country_directory"]["status"],
        "loading"
    );
}

#[tokio::test]
async fn test_health_failed_directory_is_degraded() {
    let directory =
        common::failed_directory(DirectoryError::Timeout(Duration::from_secs(10))).await;
    let server = test_server(common::create_state_with(directory, BirthDatePolicy::Off));

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["country_directory"]["status"], "error");
}
