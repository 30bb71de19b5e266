// src/gate.rs
//! Quality-gate evaluation: turns a gap list into a CI verdict.
//!
//! Five independent checks. The first three hard-fail (flip `passed`),
//! the last two only warn. Comparisons are strict: a count exactly at its
//! threshold does not fail.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::config::QualityGateConfig;
use crate::types::GapItem;

/// A gap as the gate sees it. Severity is lowercase here, and the
/// remediation-tracking fields are optional: they come from collaborators
/// outside the extraction core (test-coverage and remediation pipelines).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateGap {
    pub severity: String,
    #[serde(rename = "testCovered", default)]
    pub test_covered: bool,
    #[serde(rename = "complexityScore", default, skip_serializing_if = "Option::is_none")]
    pub complexity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<&GapItem> for GateGap {
    fn from(gap: &GapItem) -> Self {
        Self {
            severity: gap.severity.as_gate_str().to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateFailure {
    pub gate: String,
    pub expected: String,
    pub actual: String,
    pub severity: String,
    pub remediation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateWarning {
    pub gate: String,
    pub message: String,
    pub advisory: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateEvaluationResult {
    pub passed: bool,
    pub failures: Vec<GateFailure>,
    pub warnings: Vec<GateWarning>,
    pub coverage: f64,
    /// 0–100.
    pub score: u32,
    pub report: String,
}

/// Complexity assumed for gaps that carry no score of their own.
const DEFAULT_COMPLEXITY: f64 = 5.0;

/// Evaluates a gap list against the configured thresholds.
#[must_use]
pub fn evaluate(gaps: &[GateGap], config: &QualityGateConfig) -> GateEvaluationResult {
    let mut failures = Vec::new();
    let mut warnings = Vec::new();

    let critical_gaps = count_severity(gaps, "critical");
    let high_gaps = count_severity(gaps, "high");

    if critical_gaps > config.max_critical_gaps {
        failures.push(GateFailure {
            gate: "maxCriticalGaps".to_string(),
            expected: format!("<= {}", config.max_critical_gaps),
            actual: critical_gaps.to_string(),
            severity: "critical".to_string(),
            remediation: format!(
                "Reduce critical gaps from {critical_gaps} to {} before deployment.",
                config.max_critical_gaps
            ),
        });
    }

    if high_gaps > config.max_high_gaps {
        failures.push(GateFailure {
            gate: "maxHighGaps".to_string(),
            expected: format!("<= {}", config.max_high_gaps),
            actual: high_gaps.to_string(),
            severity: "high".to_string(),
            remediation: format!(
                "Reduce high gaps from {high_gaps} to {} before deployment.",
                config.max_high_gaps
            ),
        });
    }

    let coverage = calculate_coverage(gaps);
    if coverage < config.min_coverage {
        failures.push(GateFailure {
            gate: "minCoverage".to_string(),
            expected: format!(">= {:.1}%", config.min_coverage * 100.0),
            actual: format!("{:.1}%", coverage * 100.0),
            severity: "high".to_string(),
            remediation: format!(
                "Increase test coverage to {:.1}% before deployment.",
                config.min_coverage * 100.0
            ),
        });
    }

    let avg_complexity = average_complexity(gaps);
    if avg_complexity > config.max_complexity_score {
        warnings.push(GateWarning {
            gate: "maxComplexityScore".to_string(),
            message: format!(
                "Average complexity score is {avg_complexity:.2} (threshold: {})",
                config.max_complexity_score
            ),
            advisory: "Consider refactoring high-complexity components.".to_string(),
        });
    }

    let remediated = gaps
        .iter()
        .filter(|g| g.status.as_deref() == Some("remediated"))
        .count();
    if remediated < config.required_remediations {
        warnings.push(GateWarning {
            gate: "requiredRemediations".to_string(),
            message: format!(
                "{remediated} gaps remediated (required: {})",
                config.required_remediations
            ),
            advisory: format!(
                "{} more remediations needed for full coverage.",
                config.required_remediations - remediated
            ),
        });
    }

    let score = quality_score(gaps, &failures, &warnings);
    let report = render_report(&failures, &warnings, score);

    GateEvaluationResult {
        passed: failures.is_empty(),
        failures,
        warnings,
        coverage,
        score,
        report,
    }
}

fn count_severity(gaps: &[GateGap], severity: &str) -> usize {
    gaps.iter().filter(|g| g.severity == severity).count()
}

/// Fraction of gaps marked test-covered; a clean run counts as fully covered.
#[allow(clippy::cast_precision_loss)]
fn calculate_coverage(gaps: &[GateGap]) -> f64 {
    if gaps.is_empty() {
        return 1.0;
    }
    let covered = gaps.iter().filter(|g| g.test_covered).count();
    covered as f64 / gaps.len() as f64
}

#[allow(clippy::cast_precision_loss)]
fn average_complexity(gaps: &[GateGap]) -> f64 {
    if gaps.is_empty() {
        return 0.0;
    }
    let total: f64 = gaps
        .iter()
        .map(|g| g.complexity_score.unwrap_or(DEFAULT_COMPLEXITY))
        .sum();
    total / gaps.len() as f64
}

/// 100, minus 25 per failure, 10 per warning, and 5/2/1 per
/// critical/high/medium gap, floored at 0.
fn quality_score(gaps: &[GateGap], failures: &[GateFailure], warnings: &[GateWarning]) -> u32 {
    let mut score: i64 = 100;
    score -= 25 * failures.len() as i64;
    score -= 10 * warnings.len() as i64;
    for gap in gaps {
        score -= match gap.severity.as_str() {
            "critical" => 5,
            "high" => 2,
            "medium" => 1,
            _ => 0,
        };
    }
    u32::try_from(score.max(0)).unwrap_or(0)
}

fn render_report(failures: &[GateFailure], warnings: &[GateWarning], score: u32) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "Quality Gate Evaluation Report");
    let _ = writeln!(report, "==============================\n");
    let _ = writeln!(report, "Overall Quality Score: {score}/100");
    let _ = writeln!(
        report,
        "Status: {}\n",
        if failures.is_empty() { "PASS" } else { "FAIL" }
    );

    if !failures.is_empty() {
        let _ = writeln!(report, "Critical Issues ({}):", failures.len());
        let _ = writeln!(report, "{}", "-".repeat(40));
        for (i, failure) in failures.iter().enumerate() {
            let _ = writeln!(report, "{}. {}", i + 1, failure.gate);
            let _ = writeln!(report, "   Expected: {}", failure.expected);
            let _ = writeln!(report, "   Actual: {}", failure.actual);
            let _ = writeln!(report, "   Remediation: {}\n", failure.remediation);
        }
    }

    if !warnings.is_empty() {
        let _ = writeln!(report, "Warnings ({}):", warnings.len());
        let _ = writeln!(report, "{}", "-".repeat(40));
        for (i, warning) in warnings.iter().enumerate() {
            let _ = writeln!(report, "{}. {}: {}", i + 1, warning.gate, warning.message);
            let _ = writeln!(report, "   Advisory: {}\n", warning.advisory);
        }
    }

    if failures.is_empty() && warnings.is_empty() {
        let _ = writeln!(report, "All quality gates passed!");
    }

    report
}
