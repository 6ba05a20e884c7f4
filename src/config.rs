//! Client configuration parsed from environment variables.

use crate::messages::Locale;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:222";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown AUGMENT_LOCALE: {0} (expected 'vi' or 'en')")]
    UnknownLocale(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub locale: Locale,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), locale: Locale::default(), timeouts: Timeouts::default() }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `AUGMENT_BASE_URL`: backend root, default `http://127.0.0.1:222`
    /// - `AUGMENT_LOCALE`: `vi` (default) or `en`
    /// - `AUGMENT_REQUEST_TIMEOUT_SECS`: default 300
    /// - `AUGMENT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `AUGMENT_LOCALE` names an unsupported locale.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the locale value is unsupported.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(&lookup("AUGMENT_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()));
        let locale = parse_locale(lookup("AUGMENT_LOCALE").as_deref())?;
        let timeouts = Timeouts {
            request_secs: parse_u64(lookup("AUGMENT_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("AUGMENT_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { base_url, locale, timeouts })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Parse a locale name; `None` selects the default.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownLocale`] for anything but `vi`/`en`.
pub fn parse_locale(raw: Option<&str>) -> Result<Locale, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Locale::default()),
        Some(value) => value.parse().map_err(|_| ConfigError::UnknownLocale(value.to_owned())),
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
