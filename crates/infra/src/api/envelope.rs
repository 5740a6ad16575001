//! Wire types of the backend API

use dashlens_core::SqlRow;
use dashlens_domain::{DashLensError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a SQL execution request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl SqlRequest {
    /// Build a request; empty parameter maps are omitted from the body
    pub fn new(query: impl Into<String>, params: &Map<String, Value>) -> Self {
        Self { query: query.into(), params: (!params.is_empty()).then(|| params.clone()) }
    }
}

/// Envelope returned by the SQL endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Option<Vec<SqlRow>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub row_count: Option<usize>,
}

impl SqlResponse {
    /// Unwrap the rows of a successful response
    ///
    /// # Errors
    /// Returns `DashLensError::Backend` carrying the backend's message when
    /// `success` is false.
    pub fn into_rows(self) -> Result<Vec<SqlRow>> {
        if !self.success {
            let message =
                self.error.unwrap_or_else(|| "query failed without an error message".into());
            return Err(DashLensError::Backend(message));
        }
        Ok(self.result.unwrap_or_default())
    }
}

/// Body of the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
