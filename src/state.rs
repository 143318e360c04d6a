//! Shared state injected into every handler.

use crate::application::services::{CountryDirectory, RegistrationService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<RegistrationService>,
    pub country_directory: Arc<CountryDirectory>,
}

impl AppState {
    pub fn new(
        registration_service: Arc<RegistrationService>,
        country_directory: Arc<CountryDirectory>,
    ) -> Self {
        Self {
            registration_service,
            country_directory,
        }
    }
}
