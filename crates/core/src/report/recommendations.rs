//! Follow-up advice for flagged metrics
//!
//! Advice is derived from the issues of a report and the metric family.
//! Family-specific advice for financial drops comes first, then advice for
//! each issue in report order. Repeated entries keep their first position.

use dashlens_domain::utils::format::format_value;
use dashlens_domain::{Issue, IssueKind, MetricAnalysis, MetricKind};

const REVENUE_WORDS: &[&str] = &["revenue", "выручка", "сумма со скидкой"];
const PROFIT_WORDS: &[&str] = &["profit", "прибыль"];

/// Advice for one analysis; empty when nothing was flagged
pub fn recommendations(analysis: &MetricAnalysis) -> Vec<String> {
    let report = &analysis.report;
    if report.is_clean() {
        return Vec::new();
    }

    let mut advice = Advice::default();
    let name = analysis.sample.name.as_str();

    if analysis.kind == MetricKind::Financial {
        financial_drop(name, report.issues.iter(), &mut advice);
    }

    for issue in &report.issues {
        per_issue(name, analysis.kind, issue, &mut advice);
    }

    advice.0
}

#[derive(Default)]
struct Advice(Vec<String>);

impl Advice {
    fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        if !self.0.contains(&line) {
            self.0.push(line);
        }
    }
}

fn financial_drop<'a>(name: &str, issues: impl Iterator<Item = &'a Issue>, advice: &mut Advice) {
    let lower = name.to_lowercase();
    let Some(percent) = issues
        .filter(|issue| issue.kind == IssueKind::NegativeChange)
        .find_map(|issue| issue.change_percent)
    else {
        return;
    };
    let percent = format_value(percent.abs());

    if REVENUE_WORDS.iter().any(|word| lower.contains(word)) {
        advice.push(format!(
            "Revenue fell by {percent}%. Analyze the causes: seasonality, assortment changes, \
             supply problems, loss of key customers."
        ));
    }
    if PROFIT_WORDS.iter().any(|word| lower.contains(word)) {
        advice.push(format!(
            "Profit fell by {percent}%. Check cost of goods, expense growth, revenue decline \
             and shifts in the sales mix."
        ));
        advice.push("Break expenses and cost of goods down by line item to find the main drivers.");
    }
}

fn per_issue(name: &str, kind: MetricKind, issue: &Issue, advice: &mut Advice) {
    let value = format_value(issue.value);
    let bound = issue.threshold.map(format_value).unwrap_or_default();

    match issue.kind {
        IssueKind::CriticalBelowMin => {
            advice.push(format!(
                "Metric '{name}' ({value}) is critically below the norm ({bound}). \
                 Take urgent action to raise it."
            ));
            match kind {
                MetricKind::Sales => advice.push(
                    "Consider marketing campaigns, pricing changes or product quality improvements.",
                ),
                MetricKind::Operations => advice.push(
                    "Check process efficiency, room for optimization or the need for extra resources.",
                ),
                _ => {}
            }
        }
        IssueKind::CriticalAboveMax => {
            advice.push(format!(
                "Metric '{name}' ({value}) is critically above the norm ({bound}). \
                 Take action to bring it down."
            ));
            match kind {
                MetricKind::Operations => advice
                    .push("Check system load, scaling options or the need to optimize processes."),
                MetricKind::Quality => advice.push(
                    "Analyze the causes urgently and put corrective measures in place to reduce problems.",
                ),
                _ => {}
            }
        }
        IssueKind::WarningBelowMin => advice.push(format!(
            "Metric '{name}' ({value}) is below its warning level ({bound}). Watch it next period."
        )),
        IssueKind::WarningAboveMax => advice.push(format!(
            "Metric '{name}' ({value}) is above its warning level ({bound}). Watch it next period."
        )),
        IssueKind::NegativeChange => {
            let percent = format_value(issue.change_percent.unwrap_or_default().abs());
            advice.push(format!(
                "Metric '{name}' moved unfavorably by {percent}%. Investigate the causes and \
                 draft a recovery plan."
            ));
        }
    }
}
