//! Request dispatch.
//!
//! # Responsibilities
//! - Look up the route for (method, path) in the site's table
//! - Serve a static asset when no route matches
//! - Build the handler's context (params, query, body, clock, rng)
//! - Run the handler inside the error boundary
//! - Emit the reply, or the matching fallback
//!
//! # Design Decisions
//! - One processing path: match → generate → emit
//! - Routes win over static assets with the same path
//! - Two escapes: nothing matches → 404, handler failure (error, panic,
//!   oversized or stalled body) → 500
//! - Failures are never re-raised past this point

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt;

use crate::http::fallback;
use crate::http::request::read_body;
use crate::http::response::emit;
use crate::http::server::AppState;
use crate::routing::{Handler, HandlerError, PathParams, QueryParams, Reply, RequestContext};

/// The final handler behind every path and method.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let (route, handler, params) = match state.table.match_request(&method, &path) {
        Some(m) => (m.route.name(), m.route.handler(), m.params),
        None => {
            if method == Method::GET || method == Method::HEAD {
                if let Some(response) = serve_static(&state, request).await {
                    return response;
                }
            }
            tracing::debug!(method = %method, path = %path, "No route matched");
            return fallback::not_found(state.renderer.as_ref(), &path);
        }
    };

    tracing::debug!(route = %route, method = %method, path = %path, "Dispatching");

    let query = QueryParams::parse(request.uri().query().unwrap_or_default());
    let (parts, body) = request.into_parts();
    let body = match read_body(&parts.headers, body, state.max_body_size, state.body_timeout).await {
        Ok(body) => body,
        Err(e) => return fallback::handler_failure(&path, route, &e),
    };

    let result = run_handler(&state, handler, &params, &query, &body)
        .and_then(|reply| emit(state.renderer.as_ref(), reply));

    match result {
        Ok(response) => response,
        Err(e) => fallback::handler_failure(&path, route, &e),
    }
}

/// Look the path up in the static directory. `None` when there is no such
/// file, so the caller can fall back to the 404 policy.
async fn serve_static(state: &AppState, request: Request<Body>) -> Option<Response> {
    let response = match state.static_files.clone().oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };
    if response.status() == StatusCode::NOT_FOUND {
        return None;
    }
    Some(response.map(Body::new))
}

/// Invoke a handler with a fresh RNG, converting a panic into an error.
fn run_handler(
    state: &AppState,
    handler: Handler,
    params: &PathParams,
    query: &QueryParams,
    body: &Value,
) -> Result<Reply, HandlerError> {
    let mut rng = state.random.rng();
    let mut ctx = RequestContext {
        params,
        query,
        body,
        clock: state.clock.as_ref(),
        rng: rng.as_mut(),
        runtime: state.runtime.as_ref(),
    };

    catch_unwind(AssertUnwindSafe(|| handler(&mut ctx)))
        .unwrap_or_else(|payload| Err(HandlerError::Panic(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
