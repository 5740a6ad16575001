//! Shared test helpers for `dashlens-core` integration tests.

pub mod executors;

use dashlens_domain::{MetricSample, PositiveDirection, Thresholds};

/// Revenue sample that fell 40% and breached its critical floor
pub fn falling_revenue() -> MetricSample {
    MetricSample::new("Revenue")
        .expect("valid name")
        .with_current(60.0)
        .with_previous(100.0)
        .with_thresholds(Thresholds {
            critical_min: Some(70.0),
            warning_min: Some(90.0),
            ..Thresholds::default()
        })
}

/// Cost sample where lower is better and the value went down
pub fn shrinking_costs() -> MetricSample {
    MetricSample::new("Operating costs")
        .expect("valid name")
        .with_current(80.0)
        .with_previous(100.0)
        .with_direction(PositiveDirection::Down)
}
