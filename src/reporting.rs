// src/reporting.rs
//! Console output formatting for analysis and gate results.

use colored::Colorize;
use std::fmt::Write;

use crate::gate::GateEvaluationResult;
use crate::types::{AnalysisResult, GapType, Severity};

/// Renders the analysis summary and gap list for a terminal.
#[must_use]
pub fn render_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Integration Gap Analysis".bold());
    let _ = writeln!(
        out,
        "  {} API calls, {} endpoints, {} gaps",
        result.api_calls.len(),
        result.endpoints.len(),
        result.gaps.len()
    );
    let _ = writeln!(
        out,
        "  severity: {} critical, {} high, {} medium, {} low\n",
        result.summary.critical.to_string().red(),
        result.summary.high.to_string().yellow(),
        result.summary.medium,
        result.summary.low
    );

    if result.gaps.is_empty() {
        let _ = writeln!(out, "{}", "No integration gaps found.".green());
        return out;
    }

    for gap in &result.gaps {
        let badge = severity_badge(gap.severity);
        let kind = match gap.gap_type {
            GapType::OrphanedComponent => "orphaned call",
            GapType::UnusedEndpoint => "unused endpoint",
            GapType::TypeMismatch => "type mismatch",
            GapType::MissingCrud => "missing crud",
            GapType::Suggestion => "suggestion",
        };
        let _ = writeln!(
            out,
            "{badge} [{kind}] {} ({}:{})",
            gap.message,
            gap.file.display(),
            gap.line
        );
        if let Some(fix) = &gap.suggested_fix {
            let _ = writeln!(out, "       fix: {fix}");
        }
    }

    out
}

/// Renders the gate verdict; the detailed report text comes from the
/// evaluator itself.
#[must_use]
pub fn render_gate(result: &GateEvaluationResult) -> String {
    let mut out = String::new();
    let status = if result.passed {
        if result.warnings.is_empty() {
            "PASS".green().bold()
        } else {
            "WARN".yellow().bold()
        }
    } else {
        "FAIL".red().bold()
    };
    let _ = writeln!(out, "Quality gate: {status} (score {}/100)\n", result.score);
    out.push_str(&result.report);
    out
}

fn severity_badge(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Critical => "CRIT ".red().bold(),
        Severity::High => "HIGH ".red(),
        Severity::Medium => "MED  ".yellow(),
        Severity::Low => "LOW  ".normal(),
    }
}
