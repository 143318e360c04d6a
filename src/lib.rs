//! # Registration Form
//!
//! A user registration form served with Axum: field validation with Polish
//! messages and a country selector filled from a remote country list.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Draft, outcome and country entities, validation rules, repository traits
//! - **Application Layer** ([`application`]) - Country directory lifecycle and submission service
//! - **Infrastructure Layer** ([`infrastructure`]) - Remote and static country sources
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML registration page
//!
//! ## Features
//!
//! - Ordered validation rules reported all at once
//! - Country list loaded once in the background with a timeout
//! - Interactive CLI (`register`) sharing the same validator
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point at another country list
//! export COUNTRIES_API_URL="https://restcountries.com/v3.1/all?fields=name,cca2"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Metrics
//!
//! Counters are emitted through the [`metrics`] facade:
//!
//! - `registration_submissions_total{outcome=accepted|rejected}`
//! - `country_directory_loads_total{outcome=ready|timeout|transport|status|decode}`
//!
//! No recorder is installed by this crate, so the counters are dropped
//! unless the embedding binary installs one (e.g. a Prometheus exporter)
//! before calling [`server::run`].
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CountryDirectory, DirectoryState, RegistrationService};
    pub use crate::domain::entities::{CountryRecord, Gender, RegistrationDraft, ValidationOutcome};
    pub use crate::domain::validation::{BirthDatePolicy, RegistrationValidator};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
