//! The contract between the dispatcher and a route's handler.

use std::collections::HashMap;

use axum::http::StatusCode;
use rand::RngCore;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::payloads::clock::Clock;
use crate::payloads::system::RuntimeInfo;
use crate::payloads::PayloadError;
use crate::routing::matcher::PathParams;
use crate::views::{RenderError, ViewContext};

/// A route handler. Plain function pointers keep the table `'static`,
/// `Send + Sync` and trivially shareable.
pub type Handler = fn(&mut RequestContext<'_>) -> Result<Reply, HandlerError>;

/// Parsed query string. When a key repeats, the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// Parse a raw query string (without the leading `?`).
    pub fn parse(raw: &str) -> Self {
        Self(form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Everything a handler may read while producing its reply.
pub struct RequestContext<'a> {
    pub params: &'a PathParams,
    pub query: &'a QueryParams,
    pub body: &'a Value,
    pub clock: &'a dyn Clock,
    pub rng: &'a mut dyn RngCore,
    pub runtime: &'a RuntimeInfo,
}

impl RequestContext<'_> {
    /// Path parameter bound by the matched pattern.
    ///
    /// Handlers only ask for names their own pattern declares, so a miss
    /// means the table and the handler disagree.
    pub fn param(&self, name: &str) -> Result<&str, HandlerError> {
        self.params
            .get(name)
            .ok_or_else(|| HandlerError::Internal(format!("missing path parameter `{}`", name)))
    }

    /// Body field, with JSON `null` treated as absent.
    pub fn body_field(&self, name: &str) -> Option<&Value> {
        self.body.get(name).filter(|v| !v.is_null())
    }
}

/// What a handler produced: a JSON document or a view to render.
#[derive(Debug, Clone)]
pub enum Reply {
    Json { status: StatusCode, body: Value },
    View { view: &'static str, context: ViewContext },
}

impl Reply {
    /// `200 OK` with a JSON body.
    pub fn json<T: Serialize>(payload: &T) -> Result<Self, HandlerError> {
        Self::json_with_status(StatusCode::OK, payload)
    }

    /// `201 Created` with a JSON body.
    pub fn created<T: Serialize>(payload: &T) -> Result<Self, HandlerError> {
        Self::json_with_status(StatusCode::CREATED, payload)
    }

    pub fn json_with_status<T: Serialize>(
        status: StatusCode,
        payload: &T,
    ) -> Result<Self, HandlerError> {
        Ok(Reply::Json {
            status,
            body: serde_json::to_value(payload)?,
        })
    }

    pub fn view(view: &'static str, context: ViewContext) -> Self {
        Reply::View { view, context }
    }
}

/// Failure while producing a reply. Always surfaces as a 500.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to render view: {0}")]
    Render(#[from] RenderError),

    #[error("failed to generate payload: {0}")]
    Payload(#[from] PayloadError),

    #[error("failed to read request body: {0}")]
    Body(String),

    #[error("handler panicked: {0}")]
    Panic(String),

    #[error("{0}")]
    Internal(String),
}
