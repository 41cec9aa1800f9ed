use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BaremetricsError, Result};

/// Fixed origin used when no API URL is injected at build or run time.
pub const DEFAULT_API_URL: &str = "https://launchbrightly-demo.s3.amazonaws.com";

/// Environment variable naming the API origin.
pub const API_URL_ENV: &str = "BAREMETRICS_API_URL";

/// Path of the product document, relative to the base URL.
pub const PRODUCT_PATH: &str = "/baremetrics.json";

/// The API origin baked in at compile time.
///
/// Reads `BAREMETRICS_API_URL` from the build environment and falls back to
/// [`DEFAULT_API_URL`] when it was not set.
pub fn build_time_api_url() -> &'static str {
    match option_env!("BAREMETRICS_API_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_URL,
    }
}

// ---------------------------------------------------------------------------
// ErrorPolicy
// ---------------------------------------------------------------------------

/// What a client does when fetching the product document fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Return the failure to the caller as `Err`.
    #[default]
    Propagate,
    /// Log the failure at error level and resolve with `Ok(None)`.
    SuppressAndLog,
}

impl ErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::Propagate => "propagate",
            ErrorPolicy::SuppressAndLog => "suppress-and-log",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = BaremetricsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(ErrorPolicy::Propagate),
            "suppress-and-log" => Ok(ErrorPolicy::SuppressAndLog),
            other => Err(BaremetricsError::InvalidArgument(format!(
                "Unknown error policy '{}', expected 'propagate' or 'suppress-and-log'",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ClientConfig
// ---------------------------------------------------------------------------

/// Immutable settings shared by every request a client issues.
///
/// The base URL is not validated here; a malformed value surfaces as an
/// HTTP error on the first request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    base_url: String,
    #[serde(default)]
    on_error: ErrorPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(build_time_api_url(), ErrorPolicy::default())
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, on_error: ErrorPolicy) -> Self {
        Self {
            base_url: base_url.into(),
            on_error,
        }
    }

    /// Resolve the base URL from `BAREMETRICS_API_URL` at run time, falling
    /// back to the compile-time value.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| build_time_api_url().to_string());
        Self::new(base_url, ErrorPolicy::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn on_error(&self) -> ErrorPolicy {
        self.on_error
    }

    /// Full URL of the product document.
    pub fn product_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PRODUCT_PATH)
    }
}
