//! Rule-based metric classifier
//!
//! Two independent evaluations run against a [`MetricSample`]:
//!
//! 1. **Thresholds**: each of the four bounds is checked on its own. A
//!    warning bound does not fire when the matching critical bound on the
//!    same side was already breached.
//! 2. **Change**: period-over-period percentage against the previous
//!    value. Unfavorable changes of at least
//!    [`NEGATIVE_CHANGE_THRESHOLD_PERCENT`] are flagged.
//!
//! Any input that is absent skips the checks that need it. A zero previous
//! value skips the change evaluation entirely. The output is never empty.

use dashlens_domain::constants::{NEGATIVE_CHANGE_THRESHOLD_PERCENT, NORMAL_RANGE_LINE};
use dashlens_domain::utils::format::format_value;
use dashlens_domain::{
    AnalysisReport, ChangeDirection, ChangeSummary, Issue, IssueKind, MetricSample,
    PositiveDirection, Thresholds,
};

/// Classify one metric
///
/// Pure and deterministic: the same sample always yields the same report.
pub fn classify(sample: &MetricSample) -> AnalysisReport {
    let mut issues = Vec::new();
    let mut lines = Vec::new();

    if let (Some(current), Some(thresholds)) = (sample.current_value, sample.thresholds.as_ref()) {
        evaluate_thresholds(current, thresholds, &mut issues);
    }

    let change = match (sample.current_value, sample.previous_value) {
        (Some(current), Some(previous)) => {
            evaluate_change(current, previous, sample.positive_direction)
        }
        _ => None,
    };

    if let (Some(change), Some(current)) = (change.as_ref(), sample.current_value) {
        lines.push(change.line());

        if !change.favorable && change.percent.abs() >= NEGATIVE_CHANGE_THRESHOLD_PERCENT {
            issues.push(Issue {
                kind: IssueKind::NegativeChange,
                tag: IssueKind::NegativeChange.tag(),
                message: format!("Negative change of {}%", format_value(change.percent.abs())),
                value: current,
                threshold: None,
                change_percent: Some(change.percent),
            });
        }
    }

    if issues.is_empty() {
        lines.push(NORMAL_RANGE_LINE.to_string());
    } else {
        lines.extend(issues.iter().map(|issue| issue.message.clone()));
    }

    AnalysisReport { metric: sample.name.clone(), lines, issues, change }
}

/// Classify many metrics; output order follows input order
pub fn classify_batch(samples: &[MetricSample]) -> Vec<AnalysisReport> {
    samples.iter().map(classify).collect()
}

fn evaluate_thresholds(current: f64, thresholds: &Thresholds, issues: &mut Vec<Issue>) {
    if let Some(bound) = thresholds.critical_min {
        if current < bound {
            issues.push(threshold_issue(
                IssueKind::CriticalBelowMin,
                "below critical minimum",
                current,
                bound,
            ));
        }
    }

    if let Some(bound) = thresholds.critical_max {
        if current > bound {
            issues.push(threshold_issue(
                IssueKind::CriticalAboveMax,
                "above critical maximum",
                current,
                bound,
            ));
        }
    }

    if let Some(bound) = thresholds.warning_min {
        let critical_clear = thresholds.critical_min.map_or(true, |critical| current >= critical);
        if current < bound && critical_clear {
            issues.push(threshold_issue(
                IssueKind::WarningBelowMin,
                "below warning minimum",
                current,
                bound,
            ));
        }
    }

    if let Some(bound) = thresholds.warning_max {
        let critical_clear = thresholds.critical_max.map_or(true, |critical| current <= critical);
        if current > bound && critical_clear {
            issues.push(threshold_issue(
                IssueKind::WarningAboveMax,
                "above warning maximum",
                current,
                bound,
            ));
        }
    }
}

fn threshold_issue(kind: IssueKind, relation: &str, current: f64, bound: f64) -> Issue {
    Issue {
        kind,
        tag: kind.tag(),
        message: format!("Value {} is {relation} {}", format_value(current), format_value(bound)),
        value: current,
        threshold: Some(bound),
        change_percent: None,
    }
}

fn evaluate_change(
    current: f64,
    previous: f64,
    direction: PositiveDirection,
) -> Option<ChangeSummary> {
    if previous == 0.0 {
        return None;
    }

    let absolute = current - previous;
    let percent = absolute / previous.abs() * 100.0;
    let favorable = match direction {
        PositiveDirection::Up => percent > 0.0,
        PositiveDirection::Down => percent < 0.0,
    };

    Some(ChangeSummary {
        percent,
        absolute,
        direction: ChangeDirection::from_percent(percent),
        favorable,
    })
}

#[cfg(test)]
mod tests {
    use dashlens_domain::IssueTag;

    use super::*;

    fn sample(current: Option<f64>) -> MetricSample {
        let mut sample = MetricSample::new("Metric").unwrap();
        sample.current_value = current;
        sample
    }

    fn bounds(
        critical_min: Option<f64>,
        critical_max: Option<f64>,
        warning_min: Option<f64>,
        warning_max: Option<f64>,
    ) -> Thresholds {
        Thresholds { critical_min, critical_max, warning_min, warning_max }
    }

    #[test]
    fn test_scenario_a_small_unfavorable_change() {
        let report = classify(
            &sample(Some(45.5)).with_previous(44.3).with_direction(PositiveDirection::Down),
        );

        let change = report.change.unwrap();
        assert!((change.percent - 2.708_803_611).abs() < 1e-6);
        assert_eq!(change.direction, ChangeDirection::Up);
        assert!(!change.favorable);
        assert!(report.issues.is_empty());
        assert_eq!(
            report.lines,
            vec!["Change: ↑ 2.71% (+1.20)".to_string(), NORMAL_RANGE_LINE.to_string()]
        );
    }

    #[test]
    fn test_scenario_b_critical_max_suppresses_warning_max() {
        let report = classify(
            &sample(Some(80.0)).with_thresholds(bounds(None, Some(75.0), None, Some(70.0))),
        );

        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::CriticalAboveMax);
        assert_eq!(report.issues[0].threshold, Some(75.0));
        assert!(!report.has_tag(IssueTag::Warning));
        assert_eq!(report.lines, vec!["Value 80.00 is above critical maximum 75.00".to_string()]);
    }

    #[test]
    fn test_scenario_c_warning_min_without_critical() {
        let report =
            classify(&sample(Some(50.0)).with_thresholds(bounds(None, None, Some(60.0), None)));

        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::WarningBelowMin);
        assert_eq!(report.issues[0].tag, IssueTag::Warning);
        assert_eq!(report.issues[0].message, "Value 50.00 is below warning minimum 60.00");
    }

    #[test]
    fn test_scenario_d_large_negative_change() {
        let report = classify(&sample(Some(100.0)).with_previous(150.0));

        let change = report.change.unwrap();
        assert!((change.percent + 33.333_333).abs() < 1e-4);
        assert_eq!(change.direction, ChangeDirection::Down);
        assert!(!change.favorable);

        assert_eq!(report.issues.len(), 1);
        let issue = &report.issues[0];
        assert_eq!(issue.tag, IssueTag::NegativeChange);
        assert_eq!(issue.message, "Negative change of 33.33%");
        assert_eq!(report.lines[0], "Change: ↓ 33.33% (-50.00)");
    }

    #[test]
    fn test_scenario_e_value_only() {
        let report = classify(&sample(Some(42.0)));

        assert!(report.is_clean());
        assert!(report.change.is_none());
        assert_eq!(report.lines, vec![NORMAL_RANGE_LINE.to_string()]);
    }

    #[test]
    fn test_critical_min_suppresses_warning_min() {
        let report = classify(
            &sample(Some(5.0)).with_thresholds(bounds(Some(10.0), None, Some(20.0), None)),
        );

        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::CriticalBelowMin);
    }

    #[test]
    fn test_warning_min_fires_between_bounds() {
        let report = classify(
            &sample(Some(15.0)).with_thresholds(bounds(Some(10.0), None, Some(20.0), None)),
        );

        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::WarningBelowMin);
    }

    #[test]
    fn test_value_on_bound_is_not_a_breach() {
        let report = classify(
            &sample(Some(10.0))
                .with_thresholds(bounds(Some(10.0), Some(10.0), Some(10.0), Some(10.0))),
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_inverted_bounds_keep_guard_semantics() {
        // 12 breaches both criticalMin (15) and criticalMax (5); the guards
        // then keep warningMin (20) and warningMax (8) quiet.
        let report = classify(
            &sample(Some(12.0))
                .with_thresholds(bounds(Some(15.0), Some(5.0), Some(20.0), Some(8.0))),
        );

        let kinds: Vec<IssueKind> = report.issues.iter().map(|issue| issue.kind).collect();
        assert_eq!(kinds, vec![IssueKind::CriticalBelowMin, IssueKind::CriticalAboveMax]);
    }

    #[test]
    fn test_zero_previous_skips_change() {
        for current in [-5.0, 0.0, 1_000_000.0] {
            let report = classify(&sample(Some(current)).with_previous(0.0));
            assert!(report.change.is_none());
            assert!(!report.has_tag(IssueTag::NegativeChange));
            assert!(report.lines.iter().all(|line| !line.starts_with("Change:")));
        }
    }

    #[test]
    fn test_missing_current_skips_everything() {
        let report = classify(
            &sample(None)
                .with_previous(10.0)
                .with_thresholds(bounds(Some(1.0), Some(2.0), Some(3.0), Some(4.0))),
        );

        assert!(report.is_clean());
        assert!(report.change.is_none());
        assert_eq!(report.lines, vec![NORMAL_RANGE_LINE.to_string()]);
    }

    #[test]
    fn test_zero_change_is_never_favorable() {
        for direction in [PositiveDirection::Up, PositiveDirection::Down] {
            let report =
                classify(&sample(Some(10.0)).with_previous(10.0).with_direction(direction));
            let change = report.change.unwrap();
            assert!(!change.favorable);
            assert_eq!(change.direction, ChangeDirection::Flat);
            assert!(report.is_clean());
            assert_eq!(report.lines[0], "Change: → 0.00% (+0.00)");
        }
    }

    #[test]
    fn test_negative_previous_uses_absolute_baseline() {
        // -100 -> -50 is a 50% increase against |previous|
        let report = classify(&sample(Some(-50.0)).with_previous(-100.0));
        let change = report.change.unwrap();
        assert!((change.percent - 50.0).abs() < 1e-9);
        assert!(change.favorable);
        assert!(report.is_clean());
    }

    #[test]
    fn test_favorable_large_change_not_flagged() {
        let report = classify(
            &sample(Some(80.0)).with_previous(100.0).with_direction(PositiveDirection::Down),
        );
        assert!(report.change.unwrap().favorable);
        assert!(report.is_clean());
    }

    #[test]
    fn test_exactly_ten_percent_unfavorable_is_flagged() {
        let report = classify(&sample(Some(90.0)).with_previous(100.0));
        assert!(report.has_tag(IssueTag::NegativeChange));
    }

    #[test]
    fn test_thresholds_and_change_combine_in_order() {
        let report = classify(
            &sample(Some(40.0))
                .with_previous(100.0)
                .with_thresholds(bounds(Some(50.0), None, None, None)),
        );

        let kinds: Vec<IssueKind> = report.issues.iter().map(|issue| issue.kind).collect();
        assert_eq!(kinds, vec![IssueKind::CriticalBelowMin, IssueKind::NegativeChange]);
        assert_eq!(report.lines.len(), 3);
        assert!(report.lines[0].starts_with("Change: ↓ 60.00%"));
    }

    #[test]
    fn test_deterministic() {
        let input = sample(Some(73.1))
            .with_previous(91.7)
            .with_thresholds(bounds(Some(50.0), Some(90.0), Some(75.0), Some(85.0)));
        assert_eq!(classify(&input), classify(&input));
    }

    #[test]
    fn test_batch_preserves_order() {
        let samples = vec![
            MetricSample::new("first").unwrap().with_current(1.0),
            MetricSample::new("second").unwrap().with_current(2.0),
            MetricSample::new("third").unwrap(),
        ];

        let names: Vec<String> =
            classify_batch(&samples).into_iter().map(|report| report.metric).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
