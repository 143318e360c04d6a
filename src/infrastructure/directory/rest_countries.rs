//! Country source backed by a restcountries-style JSON endpoint.

use crate::domain::entities::CountryRecord;
use crate::domain::repositories::{CountryRepository, DirectoryError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Country as returned by the endpoint. Only the name and `cca2` are read.
#[derive(Debug, Deserialize)]
struct SourceCountry {
    name: SourceName,
    cca2: String,
}

/// restcountries v3.1 nests the display name under `common`; flat lists
/// carry it as a plain string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceName {
    Structured { common: String },
    Plain(String),
}

impl SourceName {
    fn into_display(self) -> String {
        match self {
            SourceName::Structured { common } => common,
            SourceName::Plain(name) => name,
        }
    }
}

/// HTTP implementation of [`CountryRepository`].
///
/// Issues a single `GET` per call. Timeouts and cancellation are owned by
/// [`crate::application::services::CountryDirectory`].
#[derive(Debug, Clone)]
pub struct RestCountriesRepository {
    client: reqwest::Client,
    url: String,
    flag_base: String,
}

impl RestCountriesRepository {
    pub fn new(
        client: reqwest::Client,
        url: impl Into<String>,
        flag_base: impl Into<String>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            flag_base: flag_base.into(),
        }
    }
}

#[async_trait]
impl CountryRepository for RestCountriesRepository {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
        debug!(url = %self.url, "Requesting country list");

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        parse_countries(&body, &self.flag_base)
    }
}

/// Decodes a country list body into records, keeping source order.
///
/// Every element must carry a name and `cca2`; one malformed element fails
/// the whole list. Repeated codes keep their first occurrence.
///
/// # Errors
///
/// Returns [`DirectoryError::Decode`] if the body is not a JSON array of
/// countries.
pub fn parse_countries(body: &[u8], flag_base: &str) -> Result<Vec<CountryRecord>, DirectoryError> {
    let source: Vec<SourceCountry> =
        serde_json::from_slice(body).map_err(|e| DirectoryError::Decode(e.to_string()))?;

    let mut seen = HashSet::with_capacity(source.len());
    let mut records = Vec::with_capacity(source.len());

    for country in source {
        if !seen.insert(country.cca2.clone()) {
            warn!(code = %country.cca2, "Duplicate country code in source, keeping first");
            continue;
        }

        records.push(CountryRecord::new(
            country.name.into_display(),
            country.cca2,
            flag_base,
        ));
    }

    Ok(records)
}
