// src/exit.rs
//! Standardized process exit codes for `GapScan`.
//!
//! Provides a stable contract for CI scripts: 0 = all gates passed,
//! 1 = at least one hard failure, 2 = warnings only.

use std::process::Termination;

use crate::gate::GateEvaluationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum GapScanExit {
    /// All quality gates passed.
    Pass = 0,
    /// At least one gate hard-failed (or a generic error occurred).
    Fail = 1,
    /// No failures, but at least one advisory warning fired.
    Warn = 2,
}

impl GapScanExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for GapScanExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&GateEvaluationResult> for GapScanExit {
    fn from(result: &GateEvaluationResult) -> Self {
        if !result.passed {
            Self::Fail
        } else if result.warnings.is_empty() {
            Self::Pass
        } else {
            Self::Warn
        }
    }
}
