//! Metric input types
//!
//! A [`MetricSample`] is built fresh for every analysis request from data a
//! collector scraped off the dashboard. It is immutable input to the
//! classifier and is never persisted.
//!
//! Field names follow the collector's camelCase JSON; the snake_case names
//! used by SQL rows and older payloads (`value`, `comparison_value`,
//! `critical_min`, ...) are accepted as aliases. A payload may carry several
//! spellings of one field: the first non-null one in the order camelCase,
//! snake_case, short alias wins.

use serde::{Deserialize, Serialize};

use crate::errors::{DashLensError, Result};
use crate::impl_domain_enum_conversions;
use crate::utils::numeric::deserialize_lenient;

/// Which direction of change counts as favorable for a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositiveDirection {
    /// Growth is good (revenue, conversion)
    #[default]
    Up,
    /// Decline is good (cost, defect rate)
    Down,
}

impl_domain_enum_conversions!(PositiveDirection {
    Up => "up",
    Down => "down",
});

/// Optional alert bounds for a metric
///
/// No ordering is enforced between the four bounds; each one is evaluated
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawThresholds")]
pub struct Thresholds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_max: Option<f64>,
}

/// Wire shape of [`Thresholds`] with every accepted spelling
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawThresholds {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    critical_min: Option<f64>,
    #[serde(default, rename = "critical_min", deserialize_with = "deserialize_lenient")]
    critical_min_snake: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    critical_max: Option<f64>,
    #[serde(default, rename = "critical_max", deserialize_with = "deserialize_lenient")]
    critical_max_snake: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    warning_min: Option<f64>,
    #[serde(default, rename = "warning_min", deserialize_with = "deserialize_lenient")]
    warning_min_snake: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    warning_max: Option<f64>,
    #[serde(default, rename = "warning_max", deserialize_with = "deserialize_lenient")]
    warning_max_snake: Option<f64>,
}

impl From<RawThresholds> for Thresholds {
    fn from(raw: RawThresholds) -> Self {
        Self {
            critical_min: raw.critical_min.or(raw.critical_min_snake),
            critical_max: raw.critical_max.or(raw.critical_max_snake),
            warning_min: raw.warning_min.or(raw.warning_min_snake),
            warning_max: raw.warning_max.or(raw.warning_max_snake),
        }
    }
}

impl Thresholds {
    /// True when no bound is set
    pub fn is_empty(&self) -> bool {
        self.critical_min.is_none()
            && self.critical_max.is_none()
            && self.warning_min.is_none()
            && self.warning_max.is_none()
    }
}

/// One dashboard metric as handed to the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawMetricSample")]
pub struct MetricSample {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    pub positive_direction: PositiveDirection,
}

/// Wire shape of [`MetricSample`] with every accepted spelling
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetricSample {
    name: String,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    current_value: Option<f64>,
    #[serde(default, rename = "current_value", deserialize_with = "deserialize_lenient")]
    current_value_snake: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    value: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    previous_value: Option<f64>,
    #[serde(default, rename = "previous_value", deserialize_with = "deserialize_lenient")]
    previous_value_snake: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    comparison_value: Option<f64>,
    #[serde(default, rename = "comparison_value", deserialize_with = "deserialize_lenient")]
    comparison_value_snake: Option<f64>,

    #[serde(default)]
    thresholds: Option<Thresholds>,

    #[serde(default)]
    positive_direction: Option<PositiveDirection>,
    #[serde(default, rename = "positive_direction")]
    positive_direction_snake: Option<PositiveDirection>,
}

impl From<RawMetricSample> for MetricSample {
    fn from(raw: RawMetricSample) -> Self {
        Self {
            name: raw.name,
            current_value: raw.current_value.or(raw.current_value_snake).or(raw.value),
            previous_value: raw
                .previous_value
                .or(raw.previous_value_snake)
                .or(raw.comparison_value)
                .or(raw.comparison_value_snake),
            thresholds: raw.thresholds,
            positive_direction: raw
                .positive_direction
                .or(raw.positive_direction_snake)
                .unwrap_or_default(),
        }
    }
}

impl MetricSample {
    /// Create a sample with only a name; every optional input is absent
    ///
    /// # Errors
    /// Returns `DashLensError::InvalidInput` if `name` is empty or blank.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let sample = Self {
            name: name.into(),
            current_value: None,
            previous_value: None,
            thresholds: None,
            positive_direction: PositiveDirection::Up,
        };
        sample.validate()?;
        Ok(sample)
    }

    pub fn with_current(mut self, value: f64) -> Self {
        self.current_value = Some(value);
        self
    }

    pub fn with_previous(mut self, value: f64) -> Self {
        self.previous_value = Some(value);
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    pub fn with_direction(mut self, direction: PositiveDirection) -> Self {
        self.positive_direction = direction;
        self
    }

    /// Check the invariants deserialization cannot express
    ///
    /// # Errors
    /// Returns `DashLensError::InvalidInput` if the name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DashLensError::InvalidInput("metric name must not be empty".into()));
        }
        Ok(())
    }
}
