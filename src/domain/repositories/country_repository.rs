//! Repository trait for the country directory source.

use crate::domain::entities::CountryRecord;
use async_trait::async_trait;
use std::time::Duration;

/// Reasons a directory load ends without countries.
///
/// Cloneable so the failure can be published to every reader of the
/// directory state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("country list request timed out after {0:?}")]
    Timeout(Duration),

    #[error("country list request failed: {0}")]
    Transport(String),

    #[error("country list endpoint answered with status {0}")]
    Status(u16),

    #[error("country list response could not be decoded: {0}")]
    Decode(String),

    #[error("country list load was cancelled")]
    Cancelled,
}

impl DirectoryError {
    /// Short machine-readable kind, used in API responses and metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            DirectoryError::Timeout(_) => "timeout",
            DirectoryError::Transport(_) => "transport",
            DirectoryError::Status(_) => "status",
            DirectoryError::Decode(_) => "decode",
            DirectoryError::Cancelled => "cancelled",
        }
    }
}

/// Read-only source of country records.
///
/// # Implementations
///
/// - [`crate::infrastructure::directory::RestCountriesRepository`] - remote JSON endpoint
/// - [`crate::infrastructure::directory::StaticCountryRepository`] - fixed in-memory list
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Fetches every country in source order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`] when the request cannot be sent,
    /// [`DirectoryError::Status`] on a non-success response and
    /// [`DirectoryError::Decode`] when the body is not a country list.
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError>;
}
