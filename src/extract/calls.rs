// src/extract/calls.rs
//! Frontend call-site extraction.
//!
//! Each supported call shape is a data-described rule (regex plus capture
//! roles) in a single table; a line may satisfy several rules and each
//! match yields one [`APICall`].

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::config::FRONTEND_EXTENSIONS;
use crate::normalize::clean_call_url;
use crate::types::{APICall, HttpMethod, SourceFile};

/// How many lines past a `fetch(` call line the method inference scans for
/// an options object. An option on line 5 is out of the window.
pub const FETCH_LOOKAHEAD_LINES: usize = 4;

/// Where a rule finds the HTTP method.
enum MethodRole {
    /// Capture group holding the method token.
    Group(usize),
    /// `fetch` has no method argument; scan the options object, default GET.
    FetchLookahead,
}

struct CallRule {
    pattern: Regex,
    url_group: usize,
    method: MethodRole,
}

static CALL_RULES: LazyLock<Vec<CallRule>> = LazyLock::new(|| {
    let rule = |pat: &str, url_group: usize, method: MethodRole| CallRule {
        pattern: Regex::new(pat).unwrap_or_else(|_| panic!("Invalid Regex")),
        url_group,
        method,
    };
    vec![
        // fetch('/url'), fetch(`/url/${id}`) — the quote class includes the
        // backtick, so template literals match without a second pattern.
        rule(
            r#"fetch\s*\(\s*['"`]([^'"`]+)['"`]"#,
            1,
            MethodRole::FetchLookahead,
        ),
        // axios.get('/url')
        rule(
            r#"axios\s*\.\s*(get|post|put|delete|patch)\s*\(\s*['"`]([^'"`]+)['"`]"#,
            2,
            MethodRole::Group(1),
        ),
        // axios({ url: '/url', method: 'post' })
        rule(
            r#"axios\s*\(\s*\{[^}]*url\s*:\s*['"`]([^'"`]+)['"`][^}]*method\s*:\s*['"`]([^'"`]+)['"`]"#,
            1,
            MethodRole::Group(2),
        ),
        // Angular: $http.get('/url')
        rule(
            r#"\$http\s*\.\s*(get|post|put|delete|patch)\s*\(\s*['"`]([^'"`]+)['"`]"#,
            2,
            MethodRole::Group(1),
        ),
        // Wrapper convention: api.get('/url'), apiClient.post(...), httpClient.put(...)
        rule(
            r#"\b(?:api|apiClient|httpClient)\s*\.\s*(get|post|put|delete|patch)\s*\(\s*['"`]([^'"`]+)['"`]"#,
            2,
            MethodRole::Group(1),
        ),
    ]
});

static METHOD_OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)method\s*:\s*['"`](GET|POST|PUT|DELETE|PATCH)['"`]"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Extracts every API call site from one frontend source file.
///
/// Files outside the frontend extension set yield nothing.
#[must_use]
pub fn extract_calls(file: &SourceFile) -> Vec<APICall> {
    if !FRONTEND_EXTENSIONS.contains(&file.extension().as_str()) {
        return Vec::new();
    }

    let component = component_name(&file.path);
    let lines: Vec<&str> = file.content.lines().collect();
    let mut calls = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        for rule in CALL_RULES.iter() {
            for caps in rule.pattern.captures_iter(line) {
                let Some(raw_url) = caps.get(rule.url_group) else {
                    continue;
                };
                let method = match rule.method {
                    MethodRole::Group(g) => {
                        let Some(m) = caps.get(g).and_then(|m| HttpMethod::parse(m.as_str()))
                        else {
                            continue;
                        };
                        m
                    }
                    MethodRole::FetchLookahead => infer_fetch_method(&lines, idx),
                };
                calls.push(APICall {
                    endpoint: clean_call_url(raw_url.as_str()),
                    method,
                    file: file.path.clone(),
                    line: idx + 1,
                    component: component.clone(),
                });
            }
        }
    }

    calls
}

/// Scans the call line and the next [`FETCH_LOOKAHEAD_LINES`] lines for a
/// `method:` option. Absent a match the call is treated as GET, which is
/// lossy for options objects built further away.
fn infer_fetch_method(lines: &[&str], call_idx: usize) -> HttpMethod {
    let end = (call_idx + FETCH_LOOKAHEAD_LINES + 1).min(lines.len());
    lines[call_idx..end]
        .iter()
        .find_map(|line| {
            METHOD_OPTION_RE
                .captures(line)
                .and_then(|caps| HttpMethod::parse(&caps[1]))
        })
        .unwrap_or(HttpMethod::Get)
}

fn component_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}
