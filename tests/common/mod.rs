#![allow(dead_code)]

use async_trait::async_trait;
use registration_form::domain::entities::DEFAULT_FLAG_BASE;
use registration_form::domain::repositories::{CountryRepository, DirectoryError};
use registration_form::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

pub fn sample_countries() -> Vec<CountryRecord> {
    vec![
        CountryRecord::new("Poland", "PL", DEFAULT_FLAG_BASE),
        CountryRecord::new("Germany", "DE", DEFAULT_FLAG_BASE),
        CountryRecord::new("Czechia", "CZ", DEFAULT_FLAG_BASE),
    ]
}

pub fn create_state_with(directory: CountryDirectory, policy: BirthDatePolicy) -> AppState {
    let directory = Arc::new(directory);
    let registration_service = Arc::new(RegistrationService::new(
        RegistrationValidator::new(policy),
        directory.clone(),
    ));

    AppState::new(registration_service, directory)
}

pub fn create_test_state() -> AppState {
    create_state_with(
        CountryDirectory::ready(sample_countries()),
        BirthDatePolicy::Off,
    )
}

/// Repository that always fails with the given error.
pub struct FailingRepository(pub DirectoryError);

#[async_trait]
impl CountryRepository for FailingRepository {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
        Err(self.0.clone())
    }
}

/// Directory whose load has already failed.
pub async fn failed_directory(error: DirectoryError) -> CountryDirectory {
    let directory =
        CountryDirectory::spawn(Arc::new(FailingRepository(error)), Duration::from_secs(5));
    directory.wait().await;
    directory
}

/// Repository that never answers.
pub struct PendingRepository;

#[async_trait]
impl CountryRepository for PendingRepository {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
        std::future::pending().await
    }
}

/// Directory still waiting on its load.
pub fn loading_directory() -> CountryDirectory {
    CountryDirectory::spawn(Arc::new(PendingRepository), Duration::from_secs(300))
}

/// A draft that passes every rule.
pub fn valid_registration() -> Value {
    json!({
        "first_name": "Anna",
        "last_name": "Nowak",
        "email": "anna@example.com",
        "password": "Abcdef12",
        "confirm_password": "Abcdef12",
        "age": 25,
        "birth_date": "1999-05-17",
        "gender": "Female",
        "country": "PL",
        "marketing_consent": false,
        "terms_accepted": true
    })
}
