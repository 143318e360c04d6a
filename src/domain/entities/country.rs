//! Country directory entries and their presentation rows.

use serde::Serialize;

/// Default prefix for flag images, sized 80px wide.
pub const DEFAULT_FLAG_BASE: &str = "https://flagcdn.com/w80";

/// A country as offered by the registration form.
///
/// Built in bulk when the directory loads and never mutated afterwards.
/// `flag_url` is derived from `code`, see [`flag_url`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    pub name: String,
    pub code: String,
    pub flag_url: String,
}

impl CountryRecord {
    /// Creates a record, deriving the flag URL from the code.
    pub fn new(name: impl Into<String>, code: impl Into<String>, flag_base: &str) -> Self {
        let code = code.into();
        let flag_url = flag_url(flag_base, &code);

        Self {
            name: name.into(),
            code,
            flag_url,
        }
    }

    /// Returns the selector row for this country.
    pub fn to_option(&self) -> CountryOption {
        CountryOption {
            value: self.code.clone(),
            label: self.name.clone(),
            icon_url: self.flag_url.clone(),
        }
    }
}

/// Structured row data for a country selector.
///
/// Whatever renders the selector (HTML template, JSON client, terminal)
/// receives the label and icon separately instead of markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    pub value: String,
    pub label: String,
    pub icon_url: String,
}

/// Builds `<base>/<lowercased code>.png`.
///
/// A trailing slash on `base` is ignored.
pub fn flag_url(base: &str, code: &str) -> String {
    format!(
        "{}/{}.png",
        base.trim_end_matches('/'),
        code.to_ascii_lowercase()
    )
}
