//! Metric sources that need no infrastructure of their own

pub mod sql;
pub mod static_source;

pub use sql::{sample_from_row, SqlMetricSource};
pub use static_source::StaticMetricSource;
