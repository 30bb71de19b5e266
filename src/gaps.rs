// src/gaps.rs
//! Gap detection: calls with no endpoint, endpoints with no caller.
//!
//! The join key is `(canonical path, method)` with exact method comparison.
//! Matching is many-to-many: one endpoint satisfies any number of calls,
//! and a single match suppresses the gap on both sides. Output ordering is
//! not part of the contract.

use std::collections::HashSet;

use crate::normalize::normalize;
use crate::types::{APICall, Endpoint, GapItem, GapType, Severity};

/// Detects orphaned calls and unused endpoints over the full extracted sets.
#[must_use]
pub fn detect(calls: &[APICall], endpoints: &[Endpoint]) -> Vec<GapItem> {
    let endpoint_keys: HashSet<(String, String)> = endpoints
        .iter()
        .map(|ep| (normalize(&ep.path), ep.method.clone()))
        .collect();
    let call_keys: HashSet<(String, String)> = calls
        .iter()
        .map(|call| (normalize(&call.endpoint), call.method.to_string()))
        .collect();

    let mut gaps = Vec::new();

    for call in calls {
        let key = (normalize(&call.endpoint), call.method.to_string());
        if !endpoint_keys.contains(&key) {
            gaps.push(GapItem {
                gap_type: GapType::OrphanedComponent,
                severity: Severity::High,
                message: format!("{} {} called but no endpoint exists", call.method, call.endpoint),
                file: call.file.clone(),
                line: call.line,
                suggested_fix: Some("Create backend endpoint".to_string()),
                related_files: None,
            });
        }
    }

    for endpoint in endpoints {
        let key = (normalize(&endpoint.path), endpoint.method.clone());
        if !call_keys.contains(&key) {
            gaps.push(GapItem {
                gap_type: GapType::UnusedEndpoint,
                severity: Severity::Medium,
                message: format!("{} {} is never called", endpoint.method, endpoint.path),
                file: endpoint.file.clone(),
                line: endpoint.line,
                suggested_fix: None,
                related_files: None,
            });
        }
    }

    gaps
}
