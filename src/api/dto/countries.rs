//! DTOs for the country directory endpoint.

use crate::application::services::DirectoryState;
use crate::domain::entities::CountryOption;
use serde::Serialize;

/// Directory snapshot for country selectors.
///
/// `status` is `loading`, `ready` or `failed`; `countries` is empty unless
/// ready.
#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub status: &'static str,
    pub countries: Vec<CountryOption>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DirectoryErrorBody>,
}

/// Why the directory has no countries.
#[derive(Debug, Serialize)]
pub struct DirectoryErrorBody {
    pub kind: &'static str,
    pub message: String,
}

impl From<&DirectoryState> for CountriesResponse {
    fn from(state: &DirectoryState) -> Self {
        Self {
            status: state.status(),
            countries: state.options(),
            error: state.error().map(|e| DirectoryErrorBody {
                kind: e.kind(),
                message: e.to_string(),
            }),
        }
    }
}
