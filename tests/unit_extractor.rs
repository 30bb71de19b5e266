// tests/unit_extractor.rs
//! Tests for call-site and endpoint extraction across framework syntaxes.

use gapscan_core::extract::{extract_calls, extract_endpoints};
use gapscan_core::types::{HttpMethod, SourceFile};

fn calls(name: &str, content: &str) -> Vec<gapscan_core::types::APICall> {
    extract_calls(&SourceFile::new(name, content))
}

fn endpoints(name: &str, content: &str) -> Vec<gapscan_core::types::Endpoint> {
    extract_endpoints(&SourceFile::new(name, content))
}

#[test]
fn test_axios_direct_form() {
    let found = calls("cart.ts", "await axios.post('/api/cart/items', payload);");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].method, HttpMethod::Post);
    assert_eq!(found[0].endpoint, "/api/cart/items");
    assert_eq!(found[0].line, 1);
}

#[test]
fn test_axios_generic_config_object() {
    let found = calls(
        "orders.js",
        "axios({ url: '/api/orders', method: 'put', data });",
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].method, HttpMethod::Put);
    assert_eq!(found[0].endpoint, "/api/orders");
}

#[test]
fn test_angular_http_and_wrapper_conventions() {
    let src = "$http.get('/api/legacy');\nhttpClient.patch('/api/items/3');\napi.delete('/api/items/4');";
    let found = calls("service.js", src);
    assert_eq!(found.len(), 3);
    assert_eq!(found[1].method, HttpMethod::Patch);
    assert_eq!(found[1].endpoint, "/api/items/3");
    assert_eq!(found[2].method, HttpMethod::Delete);
}

#[test]
fn test_two_matchers_firing_on_one_line() {
    let found = calls("mixed.ts", "fetch('/api/a'); axios.get('/api/b');");
    assert_eq!(found.len(), 2);
    let endpoints: Vec<&str> = found.iter().map(|c| c.endpoint.as_str()).collect();
    assert!(endpoints.contains(&"/api/a"));
    assert!(endpoints.contains(&"/api/b"));
}

#[test]
fn test_query_string_stripped_at_match_time() {
    let found = calls("search.tsx", "fetch('/api/search?q=' + term)");
    assert_eq!(found[0].endpoint, "/api/search");
}

#[test]
fn test_vue_files_are_frontend() {
    let found = calls("Widget.vue", "fetch('/api/widgets')");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].component, "Widget");
}

#[test]
fn test_express_router_chain() {
    let found = endpoints("routes.ts", "express.Router().put('/api/items/:id', updateItem);");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].method, "PUT");
    assert_eq!(found[0].path, "/api/items/:id");
}

#[test]
fn test_fastify_route() {
    let found = endpoints("server.js", "fastify.post('/api/login', async (req) => loginHandler);");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].method, "POST");
    assert_eq!(found[0].handler, "loginHandler");
}

#[test]
fn test_nest_decorator_without_controller_prefix() {
    let src = "@Get('health')\ncheck() { return 'ok'; }";
    let found = endpoints("health.controller.ts", src);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].path, "/health");
    assert_eq!(found[0].handler, "check");
}

#[test]
fn test_controller_prefix_redefined_mid_file() {
    let src = "@Controller('users')\n@Get()\nlist() {}\n@Controller('admin')\n@Get('stats')\nstats() {}";
    let found = endpoints("multi.controller.ts", src);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].path, "/users");
    assert_eq!(found[1].path, "/admin/stats");
}

#[test]
fn test_fastapi_router_verb() {
    let src = "@router.delete(\"/items/{item_id}\")\nasync def remove_item(item_id: int):\n    ...";
    let found = endpoints("items.py", src);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].method, "DELETE");
    assert_eq!(found[0].path, "/items/:id");
    assert_eq!(found[0].handler, "remove_item");
}

#[test]
fn test_mixed_frameworks_in_one_file() {
    // Framework detection is per-line; nothing stops a file from mixing styles.
    let src = "app.get('/api/a', handlerA);\nfastify.post('/api/b', handlerB);";
    let found = endpoints("mixed.js", src);
    assert_eq!(found.len(), 2);
}

#[test]
fn test_unknown_extension_contributes_nothing() {
    assert!(calls("README.md", "fetch('/api/users')").is_empty());
    assert!(endpoints("Makefile", "app.get('/api/users')").is_empty());
}
