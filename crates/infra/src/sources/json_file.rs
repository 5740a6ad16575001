//! Metric samples stored in a JSON file
//!
//! Two layouts are accepted:
//!
//! ```json
//! [ { "name": "Revenue", "currentValue": "1 250,00", "previousValue": 1000 } ]
//! ```
//!
//! ```json
//! { "metrics": [ { "name": "Revenue", "currentValue": 1250 } ] }
//! ```
//!
//! Entries that cannot be read are skipped with a warning; a file that is
//! not one of the two layouts is an error.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashlens_core::MetricSource;
use dashlens_domain::{DashLensError, MetricSample, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::InfraError;

#[derive(Deserialize)]
#[serde(untagged)]
enum MetricDocument {
    List(Vec<Value>),
    Wrapped { metrics: Vec<Value> },
}

/// Reads samples from a JSON file on every [`collect`](MetricSource::collect)
#[derive(Debug, Clone)]
pub struct JsonFileMetricSource {
    path: PathBuf,
}

impl JsonFileMetricSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MetricSource for JsonFileMetricSource {
    async fn collect(&self) -> Result<Vec<MetricSample>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| DashLensError::from(InfraError::from(err)))?;
        debug!(path = %self.path.display(), bytes = contents.len(), "read metrics file");

        parse_samples(&contents)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

/// Parse the contents of a metrics file
///
/// # Errors
/// Returns `DashLensError::Parse` if the text is not JSON or has neither
/// accepted layout.
pub fn parse_samples(contents: &str) -> Result<Vec<MetricSample>> {
    let document: MetricDocument = serde_json::from_str(contents).map_err(|err| {
        DashLensError::Parse(format!(
            "expected a list of metrics or an object with a 'metrics' list: {err}"
        ))
    })?;

    let entries = match document {
        MetricDocument::List(entries) | MetricDocument::Wrapped { metrics: entries } => entries,
    };

    let mut samples = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<MetricSample>(entry) {
            Ok(sample) => match sample.validate() {
                Ok(()) => samples.push(sample),
                Err(err) => warn!(entry = index, error = %err, "skipping invalid metric"),
            },
            Err(err) => warn!(entry = index, error = %err, "skipping unreadable metric"),
        }
    }

    Ok(samples)
}
