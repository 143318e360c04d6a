//! Application layer services.
//!
//! Services wrap the domain rules and the country source with the runtime
//! concerns handlers need: background loading, state publication, logging
//! and metrics.
//!
//! # Available Services
//!
//! - [`services::country_directory::CountryDirectory`] - One-shot country list loader
//! - [`services::registration_service::RegistrationService`] - Form submission checks

pub mod services;
