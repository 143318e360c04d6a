//! Parsing of raw form values into draft fields.
//!
//! Browsers submit every field as text: numbers may be empty, dates come as
//! `YYYY-MM-DD`, checkboxes are either absent or `on`. These helpers turn
//! those strings into the typed values a draft holds, mapping anything
//! unparseable to "unset" so the form rules report it.

use crate::domain::entities::Gender;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Parses an age input; empty, non-numeric and fractional values are unset.
pub fn parse_age(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(age) = trimmed.parse::<i64>() {
        return Some(age);
    }

    trimmed.parse::<f64>().ok().and_then(integral)
}

/// Parses a gender radio value; anything but `Male`/`Female` is unset.
pub fn parse_gender(raw: &str) -> Option<Gender> {
    raw.parse().ok()
}

/// Parses a date input (`YYYY-MM-DD`).
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// A checkbox is checked when present with any value but `false`/`0`/`off`.
pub fn checkbox(raw: Option<&str>) -> bool {
    match raw {
        None => false,
        Some(v) => !matches!(v.trim(), "" | "false" | "0" | "off"),
    }
}

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15).then_some(value as i64)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AgeValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Serde adapter accepting an age as a JSON number, a numeric string, an
/// empty string or `null`.
pub fn lenient_age<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<AgeValue>::deserialize(deserializer)?;

    Ok(value.and_then(|v| match v {
        AgeValue::Integer(age) => Some(age),
        AgeValue::Float(age) => integral(age),
        AgeValue::Text(text) => parse_age(&text),
    }))
}
