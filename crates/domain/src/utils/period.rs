//! Reporting periods
//!
//! Dashboards compare a current period against a comparison period. When
//! the dashboard does not say which comparison it uses, the period of the
//! same length immediately before the current one is assumed.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{DashLensError, Result};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// # Errors
    /// Returns `DashLensError::InvalidInput` if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(DashLensError::InvalidInput(format!(
                "period end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First of `today`'s month through `today`
    pub fn current_month_to_date(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        Self { start, end: today }
    }

    /// Length in days minus one, i.e. `end - start`
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// The period of equal span ending the day before this one starts
    ///
    /// `None` only when the dates would fall outside chrono's range.
    pub fn previous(&self) -> Option<Self> {
        let end = self.start.pred_opt()?;
        let start = end.checked_sub_signed(Duration::days(self.span_days()))?;
        Some(Self { start, end })
    }

    /// English name of the month the period starts in
    pub fn label(&self) -> &'static str {
        MONTH_NAMES[self.start.month0() as usize]
    }
}

/// Explicit comparison range as sent by a dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSpec {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Period selection as sent by a dashboard; every part is optional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodSpec {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub comparison: Option<ComparisonSpec>,
}

impl PeriodSpec {
    /// Resolve to `(current, comparison)`
    ///
    /// - missing `start` and `end` fall back to month-to-date of `today`
    /// - missing `comparison` falls back to [`Period::previous`]
    ///
    /// # Errors
    /// Returns `DashLensError::InvalidInput` for inverted ranges and for a
    /// range with only one of `start`/`end`.
    pub fn resolve(&self, today: NaiveDate) -> Result<(Period, Option<Period>)> {
        let current = match (self.start, self.end) {
            (Some(start), Some(end)) => Period::new(start, end)?,
            (None, None) => Period::current_month_to_date(today),
            _ => {
                return Err(DashLensError::InvalidInput(
                    "period needs both start and end".to_string(),
                ))
            }
        };

        let comparison = match self.comparison {
            Some(spec) => Some(Period::new(spec.start, spec.end)?),
            None => current.previous(),
        };

        Ok((current, comparison))
    }
}
