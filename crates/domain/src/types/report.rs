//! Analysis output types

use serde::{Deserialize, Serialize};

use crate::constants::{GLYPH_DOWN, GLYPH_FLAT, GLYPH_UP};
use crate::impl_domain_enum_conversions;
use crate::types::kind::MetricKind;
use crate::types::metric::MetricSample;
use crate::utils::format::{format_signed, format_value};

/// Tag attached to every flagged problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueTag {
    Critical,
    Warning,
    NegativeChange,
}

impl_domain_enum_conversions!(IssueTag {
    Critical => "critical",
    Warning => "warning",
    NegativeChange => "negative-change",
});

/// Which rule produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    CriticalBelowMin,
    CriticalAboveMax,
    WarningBelowMin,
    WarningAboveMax,
    NegativeChange,
}

impl IssueKind {
    pub fn tag(self) -> IssueTag {
        match self {
            Self::CriticalBelowMin | Self::CriticalAboveMax => IssueTag::Critical,
            Self::WarningBelowMin | Self::WarningAboveMax => IssueTag::Warning,
            Self::NegativeChange => IssueTag::NegativeChange,
        }
    }
}

/// A single flagged problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub tag: IssueTag,
    pub message: String,
    /// The metric's current value at the time of classification
    pub value: f64,
    /// Breached bound, for threshold issues
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Signed change percentage, for change issues
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
}

/// Sign of a change, independent of whether it is favorable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 0.0 {
            Self::Up
        } else if percent < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => GLYPH_UP,
            Self::Down => GLYPH_DOWN,
            Self::Flat => GLYPH_FLAT,
        }
    }
}

/// Period-over-period change of a metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeSummary {
    /// `(current - previous) / |previous| * 100`
    pub percent: f64,
    /// `current - previous`
    pub absolute: f64,
    pub direction: ChangeDirection,
    pub favorable: bool,
}

impl ChangeSummary {
    /// Report line: glyph by sign, magnitude, signed absolute delta
    ///
    /// `Change: ↓ 33.33% (-50.00)`
    pub fn line(&self) -> String {
        format!(
            "Change: {} {}% ({})",
            self.direction.glyph(),
            format_value(self.percent.abs()),
            format_signed(self.absolute)
        )
    }
}

/// Classifier verdict for one metric
///
/// `lines` is never empty: a report without issues carries the
/// normal-range line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metric: String,
    pub lines: Vec<String>,
    pub issues: Vec<Issue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<ChangeSummary>,
}

impl AnalysisReport {
    /// True when nothing was flagged
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_tag(&self, tag: IssueTag) -> bool {
        self.issues.iter().any(|issue| issue.tag == tag)
    }

    pub fn issues_tagged(&self, tag: IssueTag) -> impl Iterator<Item = &Issue> + '_ {
        self.issues.iter().filter(move |issue| issue.tag == tag)
    }
}

/// A sample together with its verdict, in the shape renderers consume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAnalysis {
    pub sample: MetricSample,
    pub kind: MetricKind,
    pub report: AnalysisReport,
}
