//! Fixed in-memory country source.

use crate::domain::entities::CountryRecord;
use crate::domain::repositories::{CountryRepository, DirectoryError};
use async_trait::async_trait;

/// A country source that always returns the same records.
///
/// # Use Cases
///
/// - Handler and integration tests without network access
/// - Embedding the form where the country list is known up front
#[derive(Debug, Clone, Default)]
pub struct StaticCountryRepository {
    records: Vec<CountryRecord>,
}

impl StaticCountryRepository {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CountryRepository for StaticCountryRepository {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
        Ok(self.records.clone())
    }
}
