//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::directory`; mocks are
//! generated via `mockall` for unit tests.

pub mod country_repository;

pub use country_repository::{CountryRepository, DirectoryError};

#[cfg(test)]
pub use country_repository::MockCountryRepository;
