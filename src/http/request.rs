//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every request
//! - Open the tracing span that carries the ID
//! - Read the body under a size cap and a deadline
//! - Turn the raw body into a JSON value for handlers
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A body that fails to parse is treated as empty, never as an error

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, HeaderValue, Request};
use serde_json::{Map, Value};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

use crate::routing::HandlerError;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Issues a fresh UUID v4 for requests that arrive without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Span for one request, tagged with its ID.
pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

/// Read at most `limit` bytes of body within `deadline` and parse it by
/// content type.
///
/// JSON and urlencoded forms are understood; anything else, an empty body
/// or a body that does not parse yields an empty object. Form keys are
/// taken literally, so `a[b]=c` is the flat key `a[b]`.
pub async fn read_body(
    headers: &HeaderMap,
    body: Body,
    limit: usize,
    deadline: Duration,
) -> Result<Value, HandlerError> {
    let bytes = tokio::time::timeout(deadline, to_bytes(body, limit))
        .await
        .map_err(|_| HandlerError::Body(format!("not received within {:?}", deadline)))?
        .map_err(|e| HandlerError::Body(e.to_string()))?;
    Ok(parse_body(headers, &bytes))
}

pub fn parse_body(headers: &HeaderMap, bytes: &[u8]) -> Value {
    let empty = || Value::Object(Map::new());
    if bytes.is_empty() {
        return empty();
    }

    match media_type(headers).as_deref() {
        Some("application/json") => serde_json::from_slice(bytes).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Ignoring malformed JSON body");
            empty()
        }),
        Some("application/x-www-form-urlencoded") => Value::Object(
            form_urlencoded::parse(bytes)
                .into_owned()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        ),
        other => {
            tracing::debug!(content_type = ?other, "Ignoring body with unsupported content type");
            empty()
        }
    }
}

fn media_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_json_body() {
        let value = parse_body(&headers("application/json; charset=utf-8"), br#"{"title":"x"}"#);
        assert_eq!(value, json!({ "title": "x" }));
    }

    #[test]
    fn test_malformed_json_is_empty() {
        let value = parse_body(&headers("application/json"), b"{not json");
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_form_body() {
        let value = parse_body(
            &headers("application/x-www-form-urlencoded"),
            b"title=Write+docs&assignee=Mike%20Chen",
        );
        assert_eq!(value, json!({ "title": "Write docs", "assignee": "Mike Chen" }));
    }

    #[test]
    fn test_missing_or_unknown_content_type() {
        assert_eq!(parse_body(&HeaderMap::new(), b"title=x"), json!({}));
        assert_eq!(parse_body(&headers("text/plain"), b"hello"), json!({}));
        assert_eq!(parse_body(&headers("application/json"), b""), json!({}));
    }

    #[test]
    fn test_form_keys_stay_flat() {
        let value = parse_body(
            &headers("application/x-www-form-urlencoded"),
            b"task%5Btitle%5D=Docs&tags=a&tags=b",
        );
        assert_eq!(value, json!({ "task[title]": "Docs", "tags": "b" }));
    }

    #[tokio::test]
    async fn test_read_body_enforces_limit() {
        let body = Body::from(vec![b'a'; 64]);
        let err = read_body(&headers("application/json"), body, 16, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::Body(_)));
    }

    #[tokio::test]
    async fn test_read_body_enforces_deadline() {
        let stalled = futures_util::stream::pending::<Result<axum::body::Bytes, std::io::Error>>();
        let err = read_body(
            &headers("application/json"),
            Body::from_stream(stalled),
            1024,
            Duration::from_millis(50),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, HandlerError::Body(msg) if msg.contains("50ms")));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let mut make = UuidRequestId;
        let request = Request::new(Body::empty());
        let a = make.make_request_id(&request).unwrap();
        let b = make.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
