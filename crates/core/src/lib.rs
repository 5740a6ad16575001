//! # DashLens Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The metric classifier and its report model
//! - Port/adapter interfaces (traits) for metric sources and SQL backends
//! - The analysis service, text rendering and follow-up recommendations
//!
//! ## Architecture Principles
//! - Only depends on `dashlens-domain`
//! - No HTTP, filesystem, or platform code
//! - All external dependencies via traits

pub mod classification;
pub mod report;
pub mod sources;

pub use classification::ports::{MetricSource, SqlExecutor, SqlRow};
pub use classification::{classify, classify_batch, AnalysisService};
pub use report::{recommendations, render_all, render_text, ReportPeriods};
pub use sources::{SqlMetricSource, StaticMetricSource};
