//! Configuration management
//!
//! One explicit value handed to whatever orchestrates analysis. Nothing in
//! here influences classification; the options only steer the backend
//! client and the embedding widget.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_BUTTON_TEXT, DEFAULT_RETRY_COUNT, DEFAULT_SQL_ENDPOINT,
    DEFAULT_TIMEOUT_SECS,
};
use crate::errors::{DashLensError, Result};
use crate::impl_domain_enum_conversions;

/// Corner of the page the analyze button is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl_domain_enum_conversions!(ButtonPosition {
    BottomRight => "bottom-right",
    BottomLeft => "bottom-left",
    TopRight => "top-right",
    TopLeft => "top-left",
});

/// Application configuration
///
/// Partial files are merged over [`Config::default`]: every field carries a
/// serde default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Base URL of the backend API
    #[serde(alias = "api_url")]
    pub api_url: String,
    /// Path of the SQL execution endpoint, relative to `api_url`
    #[serde(alias = "sql_endpoint")]
    pub sql_endpoint: String,
    /// Extra headers sent with every backend request
    #[serde(alias = "request_headers")]
    pub request_headers: BTreeMap<String, String>,
    #[serde(alias = "button_position")]
    pub button_position: ButtonPosition,
    #[serde(alias = "button_text")]
    pub button_text: String,
    pub debug: bool,
    #[serde(alias = "timeout_secs")]
    pub timeout_secs: u64,
    /// Total attempts per backend request (initial try + retries)
    #[serde(alias = "retry_count")]
    pub retry_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            sql_endpoint: DEFAULT_SQL_ENDPOINT.to_string(),
            request_headers: BTreeMap::new(),
            button_position: ButtonPosition::default(),
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            debug: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry_count: DEFAULT_RETRY_COUNT,
        }
    }
}

impl Config {
    /// Join `api_url` and an endpoint path without doubling slashes
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Full URL of the SQL endpoint
    pub fn sql_url(&self) -> String {
        self.endpoint_url(&self.sql_endpoint)
    }

    /// Reject values that cannot work at all
    ///
    /// # Errors
    /// Returns `DashLensError::Config` for an empty API URL, a non-HTTP
    /// scheme, or zero attempts.
    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(DashLensError::Config("apiUrl must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DashLensError::Config(format!(
                "apiUrl must start with http:// or https://, got {url}"
            )));
        }
        if self.retry_count == 0 {
            return Err(DashLensError::Config("retryCount must be at least 1".into()));
        }
        Ok(())
    }
}
