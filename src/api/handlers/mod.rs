//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod countries;
pub mod health;
pub mod registration;

pub use countries::countries_handler;
pub use health::health_handler;
pub use registration::validate_registration_handler;
