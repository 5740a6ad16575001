//! Output formatting

use std::fmt;

use anyhow::Result;
use clap::ValueEnum;
use dashlens_core::{render_all, ReportPeriods};
use dashlens_domain::MetricAnalysis;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Machine-readable JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<&'a ReportPeriods>,
    analyses: &'a [MetricAnalysis],
}

/// Format analyses for stdout
pub fn format_analyses(
    analyses: &[MetricAnalysis],
    periods: Option<&ReportPeriods>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text if analyses.is_empty() => Ok("No metrics to analyze.".to_string()),
        OutputFormat::Text => Ok(render_all(analyses, periods)),
        OutputFormat::Json => {
            Ok(serde_json::to_string_pretty(&JsonReport { period: periods, analyses })?)
        }
    }
}
