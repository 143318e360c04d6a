//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `COUNTRIES_API_URL` - Country list endpoint (default: `https://restcountries.com/v3.1/all?fields=name,cca2`)
//! - `COUNTRIES_TIMEOUT_SECONDS` - Country list fetch timeout (default: 10, range 1-300)
//! - `FLAG_CDN_BASE` - Prefix for flag image URLs (default: `https://flagcdn.com/w80`)
//! - `BIRTH_DATE_CHECK` - `off` or `legacy` (default: `off`)
//! - `BEHIND_PROXY` - Rate-limit by forwarded client IP (default: `false`)
//!
//! Every variable has a default, so an empty environment is a valid
//! configuration.

use crate::domain::entities::DEFAULT_FLAG_BASE;
use crate::domain::validation::BirthDatePolicy;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Only `name` and `cca2` are read; restcountries rejects `/all` without a
/// `fields` filter.
pub const DEFAULT_COUNTRIES_API_URL: &str = "https://restcountries.com/v3.1/all?fields=name,cca2";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub countries_api_url: String,
    /// Upper bound for the single country list request, in seconds.
    pub countries_timeout_seconds: u64,
    pub flag_cdn_base: String,
    pub birth_date_policy: BirthDatePolicy,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            countries_api_url: DEFAULT_COUNTRIES_API_URL.to_string(),
            countries_timeout_seconds: 10,
            flag_cdn_base: DEFAULT_FLAG_BASE.to_string(),
            birth_date_policy: BirthDatePolicy::Off,
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BIRTH_DATE_CHECK` or `COUNTRIES_TIMEOUT_SECONDS`
    /// is set to an unparseable value.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let countries_api_url =
            env::var("COUNTRIES_API_URL").unwrap_or(defaults.countries_api_url);
        let flag_cdn_base = env::var("FLAG_CDN_BASE").unwrap_or(defaults.flag_cdn_base);

        let countries_timeout_seconds = match env::var("COUNTRIES_TIMEOUT_SECONDS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("COUNTRIES_TIMEOUT_SECONDS must be a number, got '{v}'"))?,
            Err(_) => defaults.countries_timeout_seconds,
        };

        let birth_date_policy = match env::var("BIRTH_DATE_CHECK") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.birth_date_policy,
        };

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.behind_proxy);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            countries_api_url,
            countries_timeout_seconds,
            flag_cdn_base,
            birth_date_policy,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `countries_api_url` or `flag_cdn_base` is not an HTTP(S) URL
    /// - `countries_timeout_seconds` is outside 1-300
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        require_http_url("COUNTRIES_API_URL", &self.countries_api_url)?;
        require_http_url("FLAG_CDN_BASE", &self.flag_cdn_base)?;

        if self.countries_timeout_seconds == 0 || self.countries_timeout_seconds > 300 {
            anyhow::bail!(
                "COUNTRIES_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.countries_timeout_seconds
            );
        }

        Ok(())
    }

    pub fn countries_timeout(&self) -> Duration {
        Duration::from_secs(self.countries_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Countries API: {}", self.countries_api_url);
        tracing::info!("  Countries timeout: {}s", self.countries_timeout_seconds);
        tracing::info!("  Flag CDN: {}", self.flag_cdn_base);
        tracing::info!("  Birth date check: {}", self.birth_date_policy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.birth_date_policy == BirthDatePolicy::Off {
            tracing::warn!(
                "Birth date rule disabled: its derived age is always 0, set BIRTH_DATE_CHECK=legacy to enforce it as-is"
            );
        }
    }
}

fn require_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL: '{value}'"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{name} must use http or https, got '{value}'");
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
