//! Plain-text report rendering
//!
//! Turns a [`MetricAnalysis`] into the narrative shown to the user:
//!
//! ```text
//! Metric 'Revenue' (financial) for August (compared with July)
//! Current value: 100.00
//! Change: ↓ 33.33% (-50.00)
//!
//! Warnings
//! • Negative change of 33.33%
//!
//! Recommendations
//! • Revenue fell by 33.33%. ...
//! ```
//!
//! Critical issues are listed before warnings; negative-change issues are
//! listed with the warnings. Reports with issues end with the advice from
//! [`recommendations`].

use dashlens_domain::constants::NORMAL_RANGE_LINE;
use dashlens_domain::utils::format::format_value;
use dashlens_domain::{IssueTag, MetricAnalysis, Period};
use serde::Serialize;

use super::recommendations::recommendations;

/// Current and comparison periods shown in report headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriods {
    pub current: Period,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Period>,
}

/// Render one analysis as text, without a trailing newline
pub fn render_text(analysis: &MetricAnalysis, periods: Option<&ReportPeriods>) -> String {
    let report = &analysis.report;
    let mut out = vec![header(analysis, periods)];

    if let Some(current) = analysis.sample.current_value {
        out.push(format!("Current value: {}", format_value(current)));
    }
    if let Some(change) = &report.change {
        out.push(change.line());
    }

    if report.is_clean() {
        out.push(String::new());
        out.push(NORMAL_RANGE_LINE.to_string());
        return out.join("\n");
    }

    let critical: Vec<&str> =
        report.issues_tagged(IssueTag::Critical).map(|issue| issue.message.as_str()).collect();
    let warnings: Vec<&str> = report
        .issues
        .iter()
        .filter(|issue| issue.tag != IssueTag::Critical)
        .map(|issue| issue.message.as_str())
        .collect();

    let advice = recommendations(analysis);
    let sections = [
        ("Critical issues", critical),
        ("Warnings", warnings),
        ("Recommendations", advice.iter().map(String::as_str).collect()),
    ];

    for (title, messages) in sections {
        if messages.is_empty() {
            continue;
        }
        out.push(String::new());
        out.push(title.to_string());
        out.extend(messages.into_iter().map(|message| format!("• {message}")));
    }

    out.join("\n")
}

/// Render several analyses, separated by a blank line
pub fn render_all(analyses: &[MetricAnalysis], periods: Option<&ReportPeriods>) -> String {
    analyses
        .iter()
        .map(|analysis| render_text(analysis, periods))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn header(analysis: &MetricAnalysis, periods: Option<&ReportPeriods>) -> String {
    let mut header = format!("Metric '{}' ({})", analysis.sample.name, analysis.kind);

    if let Some(periods) = periods {
        header.push_str(&format!(" for {}", periods.current.label()));
        if let Some(comparison) = &periods.comparison {
            header.push_str(&format!(" (compared with {})", comparison.label()));
        }
    }

    header
}
