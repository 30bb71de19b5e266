// tests/unit_gate.rs
//! Tests for quality-gate evaluation and exit-code mapping.

use gapscan_core::config::QualityGateConfig;
use gapscan_core::exit::GapScanExit;
use gapscan_core::gate::{evaluate, GateGap};

fn gap(severity: &str) -> GateGap {
    GateGap {
        severity: severity.to_string(),
        ..GateGap::default()
    }
}

fn covered_gap(severity: &str) -> GateGap {
    GateGap {
        severity: severity.to_string(),
        test_covered: true,
        ..GateGap::default()
    }
}

#[test]
fn test_clean_run_passes_with_remediation_warning() {
    let result = evaluate(&[], &QualityGateConfig::default());
    assert!(result.passed);
    assert!(result.failures.is_empty());
    // Zero remediations against a required 10 is advisory, not fatal.
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].gate, "requiredRemediations");
    assert!((result.coverage - 1.0).abs() < f64::EPSILON, "no gaps counts as full coverage");
    assert_eq!(result.score, 90);
    assert_eq!(GapScanExit::from(&result), GapScanExit::Warn);
}

#[test]
fn test_critical_count_at_threshold_does_not_fail() {
    let config = QualityGateConfig {
        max_critical_gaps: 2,
        ..QualityGateConfig::default()
    };
    let gaps = vec![covered_gap("critical"), covered_gap("critical")];
    let result = evaluate(&gaps, &config);
    assert!(result.passed, "strict > comparison: at-threshold is not a failure");
    assert!(result.failures.is_empty());
}

#[test]
fn test_critical_count_one_past_threshold_fails_once() {
    let config = QualityGateConfig {
        max_critical_gaps: 2,
        ..QualityGateConfig::default()
    };
    let gaps = vec![
        covered_gap("critical"),
        covered_gap("critical"),
        covered_gap("critical"),
    ];
    let result = evaluate(&gaps, &config);
    assert!(!result.passed);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].gate, "maxCriticalGaps");
    assert_eq!(result.failures[0].expected, "<= 2");
    assert_eq!(result.failures[0].actual, "3");
    assert_eq!(GapScanExit::from(&result), GapScanExit::Fail);
}

#[test]
fn test_single_lowercase_critical_gap_fails_default_gate() {
    // Gate-side field convention is lowercase severity.
    let result = evaluate(&[gap("critical")], &QualityGateConfig::default());
    assert!(!result.passed);
    assert!(result.failures.iter().any(|f| f.gate == "maxCriticalGaps"));
    assert_eq!(GapScanExit::from(&result), GapScanExit::Fail);
}

#[test]
fn test_uncovered_gaps_fail_coverage() {
    let config = QualityGateConfig {
        max_high_gaps: 10,
        ..QualityGateConfig::default()
    };
    let gaps = vec![gap("high"), covered_gap("high")];
    let result = evaluate(&gaps, &config);
    // 1 of 2 covered = 50% < 80%.
    assert!((result.coverage - 0.5).abs() < f64::EPSILON);
    assert!(result.failures.iter().any(|f| f.gate == "minCoverage"));
}

#[test]
fn test_complexity_is_warning_not_failure() {
    let config = QualityGateConfig {
        max_complexity_score: 4.0,
        min_coverage: 0.0,
        max_high_gaps: 10,
        ..QualityGateConfig::default()
    };
    // No explicit complexity: defaults to 5.0 per gap, mean 5.0 > 4.0.
    let result = evaluate(&[gap("high")], &config);
    assert!(result.passed);
    assert!(result.warnings.iter().any(|w| w.gate == "maxComplexityScore"));
}

#[test]
fn test_remediated_status_counts_toward_requirement() {
    let config = QualityGateConfig {
        required_remediations: 1,
        min_coverage: 0.0,
        max_high_gaps: 10,
        ..QualityGateConfig::default()
    };
    let remediated = GateGap {
        severity: "high".to_string(),
        status: Some("remediated".to_string()),
        ..GateGap::default()
    };
    let result = evaluate(&[remediated], &config);
    assert!(!result.warnings.iter().any(|w| w.gate == "requiredRemediations"));
}

#[test]
fn test_score_arithmetic_and_floor() {
    // One critical gap, defaults: failures = maxCriticalGaps + minCoverage,
    // warnings = requiredRemediations. 100 - 2*25 - 10 - 5 = 35.
    let result = evaluate(&[gap("critical")], &QualityGateConfig::default());
    assert_eq!(result.failures.len(), 2);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.score, 35);

    // Enough severity deductions bottom out at 0, never negative.
    let many: Vec<GateGap> = (0..40).map(|_| gap("critical")).collect();
    let result = evaluate(&many, &QualityGateConfig::default());
    assert_eq!(result.score, 0);
}

#[test]
fn test_report_text_lists_failures_and_warnings() {
    let result = evaluate(&[gap("critical")], &QualityGateConfig::default());
    assert!(result.report.contains("Quality Gate Evaluation Report"));
    assert!(result.report.contains("Status: FAIL"));
    assert!(result.report.contains("maxCriticalGaps"));
    assert!(result.report.contains("Expected: <= 0"));
    assert!(result.report.contains("Actual: 1"));
    assert!(result.report.contains("Remediation:"));
    assert!(result.report.contains("Advisory:"));
}

#[test]
fn test_all_gates_green_report() {
    let config = QualityGateConfig {
        required_remediations: 0,
        ..QualityGateConfig::default()
    };
    let result = evaluate(&[], &config);
    assert!(result.passed);
    assert!(result.warnings.is_empty());
    assert_eq!(result.score, 100);
    assert!(result.report.contains("All quality gates passed!"));
    assert_eq!(GapScanExit::from(&result), GapScanExit::Pass);
}
