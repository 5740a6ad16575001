//! Metric source adapters that touch the outside world

pub mod json_file;

pub use json_file::JsonFileMetricSource;
