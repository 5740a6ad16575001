//! In-memory metric source

use async_trait::async_trait;
use dashlens_domain::{MetricSample, Result};

use crate::classification::ports::MetricSource;

/// Hands back a fixed list of samples
///
/// Useful for callers that already hold scraped samples and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticMetricSource {
    samples: Vec<MetricSample>,
}

impl StaticMetricSource {
    pub fn new(samples: Vec<MetricSample>) -> Self {
        Self { samples }
    }
}

#[async_trait]
impl MetricSource for StaticMetricSource {
    async fn collect(&self) -> Result<Vec<MetricSample>> {
        Ok(self.samples.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} samples)", self.samples.len())
    }
}
