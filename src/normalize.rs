// src/normalize.rs
//! Canonical path identity.
//!
//! Frontend calls and backend routes spell parameters in incompatible ways:
//! `/users/${id}`, `/users/:userId`, `/users/{user_id}`, `/users/<int:id>`,
//! `/users/123`. Matching is keyed on `(canonical path, method)`, so every
//! placeholder collapses to the single sentinel `:id`. Parameter names are
//! deliberately not preserved.

use regex::Regex;
use std::sync::LazyLock;

static BRACE_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").unwrap_or_else(|_| panic!("Invalid Regex")));
static ANGLE_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap_or_else(|_| panic!("Invalid Regex")));
static TEMPLATE_EXPR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").unwrap_or_else(|_| panic!("Invalid Regex")));
static COLON_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":[A-Za-z0-9_]+").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Converts a raw route or call path into its canonical form.
///
/// Total and deterministic: never fails, and `normalize(normalize(p)) ==
/// normalize(p)`. The rewrite steps run in a fixed order; reordering them
/// changes results (e.g. `${expr}` must be rewritten before the brace step,
/// which would otherwise consume its braces and strand the `$`).
#[must_use]
pub fn normalize(raw: &str) -> String {
    // 1. Query strings are excluded from identity.
    let path = raw.split('?').next().unwrap_or("");

    // 2. Template-literal interpolations: `${expr}` -> `:id`.
    let path = TEMPLATE_EXPR_RE.replace_all(path, ":id");

    // 3. FastAPI-style `{param}` / `{param:regex}`.
    let path = BRACE_PARAM_RE.replace_all(&path, ":id");

    // 4. Flask/Django-style `<converter:param>` / `<param>`.
    let path = ANGLE_PARAM_RE.replace_all(&path, ":id");

    // 5. Bare numeric segments: `/123` -> `/:id`.
    let path = path
        .split('/')
        .map(|seg| {
            if !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit()) {
                ":id"
            } else {
                seg
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    // 6. Any named parameter token: `:userId` -> `:id`.
    let path = COLON_PARAM_RE.replace_all(&path, ":id");

    // 7. Single leading slash, no trailing slash.
    let trimmed = path.trim().trim_matches('/');
    format!("/{trimmed}")
}

/// Cleanup applied to call URLs at match time: drops the query string and
/// rewrites `${}` interpolations. Framework parameter tokens are left alone
/// for [`normalize`] to handle during matching.
#[must_use]
pub fn clean_call_url(raw: &str) -> String {
    let url = raw.split('?').next().unwrap_or("");
    TEMPLATE_EXPR_RE.replace_all(url, ":id").trim().to_string()
}

/// Cleanup applied to route paths at extraction time: collapses brace and
/// angle-bracket converters to `:id` and pins a single leading slash.
#[must_use]
pub fn clean_route_path(raw: &str) -> String {
    let path = BRACE_PARAM_RE.replace_all(raw.trim(), ":id");
    let path = ANGLE_PARAM_RE.replace_all(&path, ":id");
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}
