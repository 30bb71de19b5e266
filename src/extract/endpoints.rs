// src/extract/endpoints.rs
//! Backend route extraction.
//!
//! Framework detection is per-line, not per-file: a file may mix Express
//! routes with decorator-style controllers, so every matcher for the
//! file's extension set runs on every line. The only cross-line state is
//! the running `@Controller` prefix, carried as an explicit accumulator
//! through the line fold rather than hidden in an extractor field.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{BACKEND_NODE_EXTENSIONS, BACKEND_PYTHON_EXTENSIONS};
use crate::normalize::clean_route_path;
use crate::types::{Endpoint, SourceFile};

/// How many lines below a route decorator the handler-name scan covers.
const HANDLER_LOOKAHEAD_LINES: usize = 2;

static EXPRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:app|router)\s*\.\s*(get|post|put|delete|patch|all)\s*\(\s*['"`]([^'"`]+)['"`]"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static EXPRESS_ROUTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"express\s*\.\s*Router\s*\(\s*\)\s*\.\s*(get|post|put|delete|patch)\s*\(\s*['"`]([^'"`]+)['"`]"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static FASTIFY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bfastify\s*\.\s*(get|post|put|delete|patch|all)\s*\(\s*['"`]([^'"`]+)['"`]"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static CONTROLLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@Controller\s*\(\s*['"`]([^'"`]+)['"`]\s*\)"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static NEST_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@(Get|Post|Put|Delete|Patch|All)\s*\(\s*(?:['"`]([^'"`)]*)['"`])?\s*\)"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static METHOD_SIG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:public\s+|private\s+|protected\s+)?(?:async\s+)?([A-Za-z_$][A-Za-z0-9_$]*)\s*\(")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static ARROW_HANDLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"=>\s*([A-Za-z_$][A-Za-z0-9_$]*)").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static NAMED_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"function\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static FASTAPI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@(?:app|router)\s*\.\s*(get|post|put|delete|patch)\s*\(\s*['"`]([^'"`]+)['"`]"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static FLASK_ROUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@(?:app|bp|blueprint)\s*\.\s*route\s*\(\s*['"`]([^'"`]+)['"`]"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static FLASK_METHODS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"methods\s*=\s*\[([^\]]+)\]").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static DJANGO_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bpath\s*\(\s*['"`]([^'"`]+)['"`]\s*,\s*([^,)]+)"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static PYTHON_DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"def\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Cross-line scan state for decorator-style files.
#[derive(Debug, Default, Clone)]
struct ScanState {
    /// Active `@Controller(...)` prefix; applies until redefined.
    controller_prefix: Option<String>,
}

/// Extracts every route registration from one backend source file.
///
/// Files outside the backend extension sets yield nothing.
#[must_use]
pub fn extract_endpoints(file: &SourceFile) -> Vec<Endpoint> {
    let ext = file.extension();
    let lines: Vec<&str> = file.content.lines().collect();
    let mut endpoints = Vec::new();

    if BACKEND_NODE_EXTENSIONS.contains(&ext.as_str()) {
        let mut state = ScanState::default();
        for (idx, line) in lines.iter().enumerate() {
            state = scan_node_line(file, &lines, idx, line, state, &mut endpoints);
        }
    } else if BACKEND_PYTHON_EXTENSIONS.contains(&ext.as_str()) {
        for (idx, line) in lines.iter().enumerate() {
            scan_python_line(file, &lines, idx, line, &mut endpoints);
        }
    }

    endpoints
}

fn scan_node_line(
    file: &SourceFile,
    lines: &[&str],
    idx: usize,
    line: &str,
    mut state: ScanState,
    out: &mut Vec<Endpoint>,
) -> ScanState {
    if let Some(caps) = CONTROLLER_RE.captures(line) {
        state.controller_prefix = Some(caps[1].to_string());
    }

    for caps in EXPRESS_RE.captures_iter(line) {
        out.push(make_endpoint(file, idx, &caps[2], &caps[1], line_handler_name(line)));
    }
    for caps in EXPRESS_ROUTER_RE.captures_iter(line) {
        out.push(make_endpoint(file, idx, &caps[2], &caps[1], line_handler_name(line)));
    }
    for caps in FASTIFY_RE.captures_iter(line) {
        out.push(make_endpoint(file, idx, &caps[2], &caps[1], line_handler_name(line)));
    }
    for caps in NEST_VERB_RE.captures_iter(line) {
        let route = caps.get(2).map_or("", |m| m.as_str());
        let full = join_with_prefix(state.controller_prefix.as_deref(), route);
        out.push(make_endpoint(file, idx, &full, &caps[1], method_handler_name(lines, idx)));
    }

    state
}

fn scan_python_line(file: &SourceFile, lines: &[&str], idx: usize, line: &str, out: &mut Vec<Endpoint>) {
    for caps in FASTAPI_RE.captures_iter(line) {
        out.push(make_endpoint(file, idx, &caps[2], &caps[1], python_handler_name(lines, idx)));
    }

    for caps in FLASK_ROUTE_RE.captures_iter(line) {
        let route = caps[1].to_string();
        let handler = python_handler_name(lines, idx);
        // One Endpoint per listed method; a route with no methods kwarg is GET.
        for method in flask_methods(line) {
            out.push(make_endpoint(file, idx, &route, &method, handler.clone()));
        }
    }

    for caps in DJANGO_PATH_RE.captures_iter(line) {
        // Django URL patterns do not encode an HTTP method.
        out.push(make_endpoint(file, idx, &caps[1], "get", caps[2].trim().to_string()));
    }
}

fn make_endpoint(file: &SourceFile, idx: usize, route: &str, method: &str, handler: String) -> Endpoint {
    Endpoint {
        path: clean_route_path(route),
        method: method.to_ascii_uppercase(),
        file: file.path.clone(),
        line: idx + 1,
        handler,
    }
}

/// `/`-joins a controller prefix and a route, collapsing duplicate slashes.
fn join_with_prefix(prefix: Option<&str>, route: &str) -> String {
    let joined = match prefix {
        Some(p) => format!("/{p}/{route}"),
        None => format!("/{route}"),
    };
    let mut collapsed = String::with_capacity(joined.len());
    for c in joined.chars() {
        if c == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

fn flask_methods(line: &str) -> Vec<String> {
    FLASK_METHODS_RE.captures(line).map_or_else(
        || vec!["GET".to_string()],
        |caps| {
            caps[1]
                .split(',')
                .map(|m| m.trim().trim_matches(['\'', '"', '`']).to_ascii_uppercase())
                .filter(|m| !m.is_empty())
                .collect()
        },
    )
}

/// Best-effort handler name from the registration line itself
/// (`(req, res) => listUsers` or `function listUsers`).
fn line_handler_name(line: &str) -> String {
    ARROW_HANDLER_RE
        .captures(line)
        .or_else(|| NAMED_FN_RE.captures(line))
        .map_or_else(|| "handler".to_string(), |caps| caps[1].to_string())
}

/// Handler name for decorator routes: the method signature on one of the
/// following lines.
fn method_handler_name(lines: &[&str], decorator_idx: usize) -> String {
    let end = (decorator_idx + HANDLER_LOOKAHEAD_LINES + 1).min(lines.len());
    lines[decorator_idx + 1..end]
        .iter()
        .find_map(|line| METHOD_SIG_RE.captures(line).map(|caps| caps[1].to_string()))
        .unwrap_or_else(|| "handler".to_string())
}

fn python_handler_name(lines: &[&str], decorator_idx: usize) -> String {
    lines
        .get(decorator_idx + 1)
        .and_then(|line| PYTHON_DEF_RE.captures(line))
        .map_or_else(|| "handler".to_string(), |caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(name: &str, content: &str) -> Vec<Endpoint> {
        extract_endpoints(&SourceFile::new(name, content))
    }

    #[test]
    fn test_express_route() {
        let eps = extract("routes.js", "app.get('/api/users', (req, res) => listUsers);");
        assert_eq!(eps.len(), 1);
        assert_eq!(eps[0].method, "GET");
        assert_eq!(eps[0].path, "/api/users");
        assert_eq!(eps[0].handler, "listUsers");
    }

    #[test]
    fn test_controller_prefix_carries_forward() {
        let src = "@Controller('users')\nexport class UsersController {\n  @Get(':id')\n  findOne(@Param('id') id: string) {}\n  @Post()\n  create(@Body() dto: CreateUserDto) {}\n}";
        let eps = extract("users.controller.ts", src);
        assert_eq!(eps.len(), 2);
        assert_eq!(eps[0].path, "/users/:id");
        assert_eq!(eps[0].handler, "findOne");
        assert_eq!(eps[1].path, "/users");
        assert_eq!(eps[1].method, "POST");
        assert_eq!(eps[1].handler, "create");
    }

    #[test]
    fn test_flask_methods_fan_out() {
        let src = "@app.route('/items', methods=['GET', 'POST'])\ndef items():\n    pass";
        let eps = extract("app.py", src);
        assert_eq!(eps.len(), 2);
        assert!(eps.iter().any(|e| e.method == "GET"));
        assert!(eps.iter().any(|e| e.method == "POST"));
        assert!(eps.iter().all(|e| e.handler == "items"));
    }

    #[test]
    fn test_flask_default_method_is_get() {
        let eps = extract("app.py", "@app.route('/health')\ndef health():\n    pass");
        assert_eq!(eps.len(), 1);
        assert_eq!(eps[0].method, "GET");
    }

    #[test]
    fn test_django_pattern_is_get_with_converter() {
        let eps = extract("urls.py", "path('users/<int:pk>/', views.user_detail),");
        assert_eq!(eps.len(), 1);
        assert_eq!(eps[0].method, "GET");
        assert_eq!(eps[0].path, "/users/:id");
        assert_eq!(eps[0].handler, "views.user_detail");
    }

    #[test]
    fn test_fastapi_brace_converter() {
        let src = "@router.get(\"/users/{user_id}\")\nasync def read_user(user_id: int):\n    pass";
        let eps = extract("api.py", src);
        assert_eq!(eps[0].path, "/users/:id");
        assert_eq!(eps[0].handler, "read_user");
    }
}
