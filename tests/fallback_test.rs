//! Not-found and handler-failure behaviour.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::json;

use vibe_app::config::AppConfig;
use vibe_app::routing::{HandlerError, Reply, RequestContext, RouteTable};
use vibe_app::sites::{self, Site};
use vibe_app::views::{HtmlRenderer, ViewContext};

mod common;

use common::{
    body_json, body_text, content_type, router_for, router_with_config, send, send_json,
    vibe_router,
};

const LEAKED: &str = "connection string postgres://admin:hunter2@db";

fn failing(_: &mut RequestContext<'_>) -> Result<Reply, HandlerError> {
    Err(HandlerError::Internal(LEAKED.to_string()))
}

fn panicking(_: &mut RequestContext<'_>) -> Result<Reply, HandlerError> {
    panic!("{}", LEAKED);
}

fn unknown_view(_: &mut RequestContext<'_>) -> Result<Reply, HandlerError> {
    Ok(Reply::view("missing", ViewContext::new()))
}

fn broken_site() -> Site {
    let table = RouteTable::builder()
        .get("/api/fail", "api-fail", failing)
        .get("/api/panic", "api-panic", panicking)
        .get("/fail", "page-fail", failing)
        .get("/panic", "page-panic", panicking)
        .get("/missing-view", "missing-view", unknown_view)
        .build()
        .unwrap();

    Site {
        name: "Broken",
        table,
        renderer: Arc::new(HtmlRenderer::new("Broken", &["index", "404"])),
    }
}

#[tokio::test]
async fn test_api_not_found_is_json_for_every_method() {
    let router = vibe_router();
    for method in [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
    ] {
        let response = send(&router, method.clone(), "/api/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", method);
        assert!(content_type(&response).starts_with("application/json"));
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Not Found", "path": "/api/nope" })
        );
    }
}

#[tokio::test]
async fn test_api_root_is_api_family() {
    let router = vibe_router();
    let response = send(&router, Method::GET, "/api").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["path"], "/api");
}

#[tokio::test]
async fn test_page_not_found_is_html() {
    let router = vibe_router();
    let response = send(&router, Method::GET, "/no-such-page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(content_type(&response).starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("404 - Page Not Found"));
    assert!(html.contains("/no-such-page"));
}

#[tokio::test]
async fn test_wrong_method_is_not_found() {
    let router = vibe_router();

    let response = send(&router, Method::DELETE, "/api/tasks").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&router, Method::POST, "/dashboard").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(content_type(&response).starts_with("text/html"));
}

#[tokio::test]
async fn test_head_is_not_get() {
    let router = vibe_router();
    let response = send(&router, Method::HEAD, "/api/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_param_segment_is_not_found() {
    let router = vibe_router();
    let response = send(&router, Method::GET, "/api/employee-performance/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&router, Method::GET, "/api/employee-performance/1/extra").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_handler_error_is_generic_json() {
    let router = router_for(broken_site());
    for path in ["/api/fail", "/api/panic"] {
        let response = send(&router, Method::GET, path).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", path);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Something went wrong!" }));
    }
}

#[tokio::test]
async fn test_page_handler_error_is_generic_html() {
    let router = router_for(broken_site());
    for path in ["/fail", "/panic", "/missing-view"] {
        let response = send(&router, Method::GET, path).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", path);
        assert!(content_type(&response).starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.contains("Something went wrong!"));
        assert!(!html.contains("hunter2"));
    }
}

#[tokio::test]
async fn test_server_survives_a_panic() {
    let router = router_for(broken_site());
    let response = send(&router, Method::GET, "/api/panic").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = send(&router, Method::GET, "/api/fail").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = send(&router, Method::GET, "/api/other").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_oversized_body_is_api_failure() {
    let router = vibe_router();
    let body = format!(r#"{{"title":"{}"}}"#, "x".repeat(3 * 1024 * 1024));
    let response = send_json(&router, Method::POST, "/api/tasks", &body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type(&response).starts_with("application/json"));
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Something went wrong!" })
    );
}

#[tokio::test]
async fn test_configured_body_cap() {
    let mut config = AppConfig::default();
    config.security.max_body_size = 64;
    let router = router_with_config(config, sites::vibe::site().unwrap());

    let response = send_json(&router, Method::POST, "/api/tasks", r#"{"title":"short"}"#).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let long = format!(r#"{{"title":"{}"}}"#, "x".repeat(100));
    let response = send_json(&router, Method::POST, "/api/tasks", &long).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
