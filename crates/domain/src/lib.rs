//! # DashLens Domain
//!
//! Business domain types and models for DashLens.
//!
//! This crate contains:
//! - Metric input types (`MetricSample`, `Thresholds`, `PositiveDirection`)
//! - Analysis output types (`AnalysisReport`, `Issue`, `ChangeSummary`)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Pure helpers (reporting periods, lenient number parsing)
//!
//! ## Architecture
//! - No dependencies on other DashLens crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::numeric::parse_metric_number;
pub use utils::period::{Period, PeriodSpec};
