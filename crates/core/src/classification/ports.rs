//! Port interfaces for metric analysis
//!
//! Infrastructure adapters implement these; core logic only ever sees the
//! traits.

use async_trait::async_trait;
use dashlens_domain::{MetricSample, Result};
use serde_json::{Map, Value};

/// One result row from the backend, column name to JSON value
pub type SqlRow = Map<String, Value>;

/// Where metric samples come from
///
/// A dashboard scraper, a JSON dump of one, or a SQL query against the
/// backend all look the same to the analysis service.
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Collect samples in display order
    async fn collect(&self) -> Result<Vec<MetricSample>>;

    /// Short human-readable description used in logs
    fn describe(&self) -> String {
        "metric source".to_string()
    }
}

/// Trait for running read-only SQL through the backend
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Execute `query` with named `params`, returning all rows
    async fn execute_sql(&self, query: &str, params: &Map<String, Value>) -> Result<Vec<SqlRow>>;
}
