//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use vibe_app::config::AppConfig;
use vibe_app::http::AppServer;
use vibe_app::payloads::clock::FixedClock;
use vibe_app::payloads::random::SeededRandom;
use vibe_app::sites::{self, Site};

pub const SEED: u64 = 2025;

/// The instant every test server's clock is frozen at.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 1, 10, 0, 0).unwrap()
}

/// In-process router for `site` with a frozen clock and seeded RNG.
pub fn router_for(site: Site) -> Router {
    router_with_config(AppConfig::default(), site)
}

pub fn router_with_config(config: AppConfig, site: Site) -> Router {
    AppServer::with_sources(
        config,
        site,
        Arc::new(FixedClock(fixed_now())),
        Arc::new(SeededRandom(SEED)),
    )
    .router()
}

pub fn vibe_router() -> Router {
    router_for(sites::vibe::site().unwrap())
}

pub fn time_converter_router() -> Router {
    router_for(sites::time_converter::site().unwrap())
}

/// Drive one request through the full middleware stack.
pub async fn send(router: &Router, method: Method, path: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn send_json(router: &Router, method: Method, path: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// GET `path`, assert 200 and return the JSON body.
pub async fn get_json(router: &Router, path: &str) -> Value {
    let response = send(router, Method::GET, path).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {}", path);
    body_json(response).await
}

pub fn content_type(response: &Response) -> String {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
