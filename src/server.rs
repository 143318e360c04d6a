//! HTTP server initialization and runtime setup.
//!
//! Handles the country directory load, service wiring and Axum server lifecycle.

use crate::application::services::{CountryDirectory, RegistrationService};
use crate::config::Config;
use crate::domain::validation::RegistrationValidator;
use crate::infrastructure::directory::RestCountriesRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - HTTP client for the country list
/// - Background country directory load
/// - Registration service
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    let repository = Arc::new(RestCountriesRepository::new(
        client,
        config.countries_api_url.clone(),
        config.flag_cdn_base.clone(),
    ));
    let directory = Arc::new(CountryDirectory::spawn(
        repository,
        config.countries_timeout(),
    ));
    tracing::info!("Country directory load started");

    let validator = RegistrationValidator::new(config.birth_date_policy);
    let registration_service = Arc::new(RegistrationService::new(validator, directory.clone()));

    let state = AppState::new(registration_service, directory.clone());

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    directory.cancel();
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
