//! Not-found and error responses.
//!
//! The shape of a fallback depends on the route family of the request
//! path: `/api` and everything under it gets JSON, every other path gets
//! HTML. Error details are logged and never sent to the client.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::routing::HandlerError;
use crate::views::{pages, Renderer};

pub const NOT_FOUND_VIEW: &str = "404";

const ERROR_PAGE: &str = "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head><meta charset=\"utf-8\"><title>500 - Something went wrong</title></head>\n\
<body><main><h1>Something went wrong!</h1></main></body>\n\
</html>\n";

const NOT_FOUND_PAGE: &str = "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head><meta charset=\"utf-8\"><title>404 - Page Not Found</title></head>\n\
<body><main><h1>404 - Page Not Found</h1></main></body>\n\
</html>\n";

/// Which fallback policy applies to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFamily {
    Api,
    Page,
}

impl RouteFamily {
    pub fn of(path: &str) -> Self {
        if path == "/api" || path.starts_with("/api/") {
            RouteFamily::Api
        } else {
            RouteFamily::Page
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteFamily::Api => "api",
            RouteFamily::Page => "page",
        }
    }
}

/// 404 for a request no route matched.
pub fn not_found(renderer: &dyn Renderer, path: &str) -> Response {
    match RouteFamily::of(path) {
        RouteFamily::Api => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Not Found", "path": path })),
        )
            .into_response(),
        RouteFamily::Page => {
            let body = renderer
                .render(NOT_FOUND_VIEW, &pages::not_found(path))
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Not-found view unavailable, using built-in page");
                    NOT_FOUND_PAGE.to_string()
                });
            (StatusCode::NOT_FOUND, Html(body)).into_response()
        }
    }
}

/// 500 for a handler that failed. The error is logged, not returned.
pub fn handler_failure(path: &str, route: &str, error: &HandlerError) -> Response {
    tracing::error!(route = %route, path = %path, error = %error, "Handler failed");

    match RouteFamily::of(path) {
        RouteFamily::Api => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Something went wrong!" })),
        )
            .into_response(),
        RouteFamily::Page => (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response(),
    }
}
