//! Analysis service - core business logic

use std::sync::Arc;

use dashlens_domain::{Config, MetricAnalysis, MetricKind, MetricSample, Result};
use tracing::{debug, info};

use super::classifier::classify;
use super::ports::MetricSource;

/// Orchestrates collect → classify for one analysis request
///
/// Samples are classified one after another in the order the source
/// returned them, so the result list lines up with the dashboard.
pub struct AnalysisService {
    source: Arc<dyn MetricSource>,
    config: Config,
}

impl AnalysisService {
    /// Create a new analysis service
    pub fn new(source: Arc<dyn MetricSource>, config: Config) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Collect samples from the source and classify each of them
    pub async fn run(&self) -> Result<Vec<MetricAnalysis>> {
        let samples = self.source.collect().await?;
        info!(source = %self.source.describe(), count = samples.len(), "collected metric samples");

        Ok(self.analyze(samples))
    }

    /// Classify already collected samples
    pub fn analyze(&self, samples: Vec<MetricSample>) -> Vec<MetricAnalysis> {
        samples
            .into_iter()
            .map(|sample| {
                let report = classify(&sample);
                if self.config.debug {
                    debug!(
                        metric = %sample.name,
                        issues = report.issues.len(),
                        change = ?report.change.map(|c| c.percent),
                        "classified metric"
                    );
                }
                MetricAnalysis { kind: MetricKind::detect(&sample.name), sample, report }
            })
            .collect()
    }
}
