//! Business logic services for the application layer.

pub mod country_directory;
pub mod registration_service;

pub use country_directory::{CountryDirectory, DirectoryState};
pub use registration_service::RegistrationService;
