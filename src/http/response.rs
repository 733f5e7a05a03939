//! Response emission.
//!
//! Turns a handler's [`Reply`] into an HTTP response. Rendering a view can
//! still fail here, so the caller receives a `Result` and routes errors to
//! the error boundary like any other handler failure.

use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::routing::{HandlerError, Reply};
use crate::views::Renderer;

pub fn emit(renderer: &dyn Renderer, reply: Reply) -> Result<Response, HandlerError> {
    match reply {
        Reply::Json { status, body } => Ok((status, Json(body)).into_response()),
        Reply::View { view, context } => {
            let html = renderer.render(view, &context)?;
            Ok(Html(html).into_response())
        }
    }
}
