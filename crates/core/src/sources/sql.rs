//! Metric source backed by a SQL query on the backend
//!
//! The query must return one row per metric. Recognised columns:
//!
//! | column                                   | meaning            |
//! |------------------------------------------|--------------------|
//! | `name` / `metric`                        | metric name        |
//! | `current_value` / `value`                | current value      |
//! | `previous_value` / `comparison_value`    | comparison value   |
//! | `critical_min`, `critical_max`           | critical bounds    |
//! | `warning_min`, `warning_max`             | warning bounds     |
//! | `positive_direction`                     | `up` or `down`     |
//!
//! Numeric columns may come back as numbers or as display strings.

use std::sync::Arc;

use async_trait::async_trait;
use dashlens_domain::{
    parse_metric_number, DashLensError, MetricSample, PositiveDirection, Result, Thresholds,
};
use serde_json::{Map, Value};
use tracing::warn;

use crate::classification::ports::{MetricSource, SqlExecutor, SqlRow};

/// Runs one query and turns each row into a [`MetricSample`]
pub struct SqlMetricSource {
    executor: Arc<dyn SqlExecutor>,
    query: String,
    params: Map<String, Value>,
}

impl SqlMetricSource {
    pub fn new(executor: Arc<dyn SqlExecutor>, query: impl Into<String>) -> Self {
        Self { executor, query: query.into(), params: Map::new() }
    }

    /// Bind a named query parameter
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl MetricSource for SqlMetricSource {
    async fn collect(&self) -> Result<Vec<MetricSample>> {
        let rows = self.executor.execute_sql(&self.query, &self.params).await?;

        let mut samples = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match sample_from_row(row) {
                Ok(sample) => samples.push(sample),
                Err(err) => warn!(row = index, error = %err, "skipping unusable metric row"),
            }
        }
        Ok(samples)
    }

    fn describe(&self) -> String {
        "sql query".to_string()
    }
}

/// Map a result row onto a sample
///
/// # Errors
/// Returns `DashLensError::InvalidInput` if the row has no usable name.
pub fn sample_from_row(row: &SqlRow) -> Result<MetricSample> {
    let name = first_present(row, &["name", "metric"])
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| DashLensError::InvalidInput("row has no metric name".into()))?;

    let number = |keys: &[&str]| first_present(row, keys).and_then(value_to_f64);

    let thresholds = Thresholds {
        critical_min: number(&["critical_min"]),
        critical_max: number(&["critical_max"]),
        warning_min: number(&["warning_min"]),
        warning_max: number(&["warning_max"]),
    };

    let positive_direction = match row.get("positive_direction").and_then(Value::as_str) {
        Some(raw) => raw.parse::<PositiveDirection>().unwrap_or_else(|err| {
            warn!(metric = name, error = %err, "unknown positive_direction, assuming up");
            PositiveDirection::Up
        }),
        None => PositiveDirection::Up,
    };

    Ok(MetricSample {
        name: name.to_string(),
        current_value: number(&["current_value", "value"]),
        previous_value: number(&["previous_value", "comparison_value"]),
        thresholds: (!thresholds.is_empty()).then_some(thresholds),
        positive_direction,
    })
}

fn first_present<'a>(row: &'a SqlRow, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| row.get(*key)).find(|value| !value.is_null())
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => parse_metric_number(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> SqlRow {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_maps_full_row() {
        let sample = sample_from_row(&row(json!({
            "name": "Cost",
            "current_value": 120.5,
            "previous_value": "100,00",
            "critical_max": 150,
            "warning_max": 110,
            "positive_direction": "down"
        })))
        .unwrap();

        assert_eq!(sample.name, "Cost");
        assert_eq!(sample.current_value, Some(120.5));
        assert_eq!(sample.previous_value, Some(100.0));
        assert_eq!(sample.positive_direction, PositiveDirection::Down);
        let thresholds = sample.thresholds.unwrap();
        assert_eq!(thresholds.critical_max, Some(150.0));
        assert_eq!(thresholds.warning_max, Some(110.0));
    }

    #[test]
    fn test_aliases_and_nulls() {
        let sample = sample_from_row(&row(json!({
            "metric": "Orders",
            "current_value": null,
            "value": 42,
            "comparison_value": null
        })))
        .unwrap();

        assert_eq!(sample.current_value, Some(42.0));
        assert_eq!(sample.previous_value, None);
        assert_eq!(sample.thresholds, None);
    }

    #[test]
    fn test_unknown_direction_defaults_up() {
        let sample =
            sample_from_row(&row(json!({"name": "X", "positive_direction": "sideways"}))).unwrap();
        assert_eq!(sample.positive_direction, PositiveDirection::Up);
    }

    #[test]
    fn test_missing_name_rejected() {
        assert!(matches!(
            sample_from_row(&row(json!({"value": 1}))),
            Err(DashLensError::InvalidInput(_))
        ));
        assert!(sample_from_row(&row(json!({"name": "  "}))).is_err());
    }
}
