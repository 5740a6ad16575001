//! Domain types and models
//!
//! - [`metric`]: classifier input (one scraped dashboard metric)
//! - [`report`]: classifier output (narrative lines plus flagged issues)
//! - [`kind`]: coarse metric family used for report headers

pub mod kind;
pub mod metric;
pub mod report;

pub use kind::MetricKind;
pub use metric::{MetricSample, PositiveDirection, Thresholds};
pub use report::{
    AnalysisReport, ChangeDirection, ChangeSummary, Issue, IssueKind, IssueTag, MetricAnalysis,
};
