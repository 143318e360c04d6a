mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use registration_form::api::handlers::countries_handler;
use registration_form::application::services::CountryDirectory;
use registration_form::domain::repositories::DirectoryError;
use registration_form::domain::validation::BirthDatePolicy;
use registration_form::infrastructure::directory::StaticCountryRepository;
use registration_form::state::AppState;
use std::sync::Arc;
use std::time::Duration;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/countries", get(countries_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_countries_ready_in_source_order() {
    let server = test_server(common::create_test_state());

    let response = server.get("/api/countries").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ready");
    assert!(json.get("error").is_none());

    let countries = json["countries"].as_array().unwrap();
    assert_eq!(countries.len(), 3);
    assert_eq!(countries[0]["value"], "PL");
    assert_eq!(countries[0]["label"], "Poland");
    assert_eq!(countries[0]["icon_url"], "https://flagcdn.com/w80/pl.png");
    assert_eq!(countries[2]["value"], "CZ");
}

#[tokio::test]
async fn test_countries_failed_directory() {
    let directory = common::failed_directory(DirectoryError::Status(503)).await;
    let server = test_server(common::create_state_with(directory, BirthDatePolicy::Off));

    let response = server.get("/api/countries").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "failed");
    assert_eq!(json["countries"], serde_json::json!([]));
    assert_eq!(json["error"]["kind"], "status");
}

#[tokio::test]
async fn test_countries_while_loading() {
    let server = test_server(common::create_state_with(
        common::loading_directory(),
        BirthDatePolicy::Off,
    ));

    let response = server.get("/api/countries").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "loading");
    assert_eq!(json["countries"], serde_json::json!([]));
}

#[tokio::test]
async fn test_countries_after_background_load() {
    let directory = CountryDirectory::spawn(
        Arc::new(StaticCountryRepository::new(common::sample_countries())),
        Duration::from_secs(5),
    );
    directory.wait().await;
    let server = test_server(common::create_state_with(directory, BirthDatePolicy::Off));

    let json = server.get("/api/countries").await.json::<serde_json::Value>();

    assert_eq!(json["status"], "ready");
    assert_eq!(json["countries"][1]["value"], "DE");
}
