//! Route table and lookup.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Look up the route for a (method, path) pair
//! - Return the matched route or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in registration order; first match wins
//! - Duplicate (method, pattern) pairs are rejected when the table is built

use axum::http::Method;
use thiserror::Error;

use crate::routing::handler::Handler;
use crate::routing::matcher::{PathParams, PathPattern};

/// Problems detected while building a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("unsupported method {method} for `{pattern}` (only GET and POST)")]
    UnsupportedMethod { method: Method, pattern: String },

    #[error("duplicate route {method} `{pattern}` (already registered as `{existing}`)")]
    Duplicate {
        method: Method,
        pattern: String,
        existing: String,
    },
}

/// A single table entry.
#[derive(Debug, Clone)]
pub struct Route {
    name: &'static str,
    method: Method,
    pattern: PathPattern,
    handler: Handler,
}

impl Route {
    /// Identifier used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn handler(&self) -> Handler {
        self.handler
    }
}

/// Result of a successful lookup.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: PathParams,
}

/// Immutable, ordered set of routes.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Find the first route whose method equals `method` and whose
    /// pattern matches `path`.
    pub fn match_request(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        self.routes
            .iter()
            .filter(|route| route.method == *method)
            .find_map(|route| {
                route
                    .pattern
                    .matches(path)
                    .map(|params| RouteMatch { route, params })
            })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Collects routes and validates them once, in [`RouteTableBuilder::build`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
    errors: Vec<RouteError>,
}

impl RouteTableBuilder {
    pub fn get(self, pattern: &str, name: &'static str, handler: Handler) -> Self {
        self.route(Method::GET, pattern, name, handler)
    }

    pub fn post(self, pattern: &str, name: &'static str, handler: Handler) -> Self {
        self.route(Method::POST, pattern, name, handler)
    }

    /// Register a route. Errors are deferred to `build`.
    pub fn route(
        mut self,
        method: Method,
        pattern: &str,
        name: &'static str,
        handler: Handler,
    ) -> Self {
        if method != Method::GET && method != Method::POST {
            self.errors.push(RouteError::UnsupportedMethod {
                method,
                pattern: pattern.to_string(),
            });
            return self;
        }

        let pattern = match PathPattern::parse(pattern) {
            Ok(p) => p,
            Err(e) => {
                self.errors.push(e);
                return self;
            }
        };

        let existing = self
            .routes
            .iter()
            .find(|r| r.method == method && r.pattern.shape() == pattern.shape());
        if let Some(existing) = existing {
            self.errors.push(RouteError::Duplicate {
                method,
                pattern: pattern.as_str().to_string(),
                existing: existing.pattern.as_str().to_string(),
            });
            return self;
        }

        self.routes.push(Route {
            name,
            method,
            pattern,
            handler,
        });
        self
    }

    /// Freeze the table. Fails with the first registration error.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }
        Ok(RouteTable {
            routes: self.routes,
        })
    }
}
