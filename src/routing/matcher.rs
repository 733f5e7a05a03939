//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse path templates such as `/api/tasks/:id`
//! - Match a concrete request path against a template
//! - Bind named parameters to the percent-decoded path component
//!
//! # Design Decisions
//! - Literal segments are compared case-sensitively
//! - A single trailing slash on the request path is ignored
//! - Literals match the raw path; only bound parameters are decoded
//! - Parameters are always strings (no coercion)
//! - No regex, matching is a single pass over the segments

use std::fmt;

use crate::routing::router::RouteError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled path template.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a template. Fails on a missing leading `/`, empty segments,
    /// empty parameter names or a parameter name used twice.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with `/`"))?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(invalid("empty path segment"));
                }
                let segment = match part.strip_prefix(':') {
                    Some("") => return Err(invalid("empty parameter name")),
                    Some(name) => {
                        if segments.contains(&Segment::Param(name.to_string())) {
                            return Err(invalid("parameter name used twice"));
                        }
                        Segment::Param(name.to_string())
                    }
                    None => Segment::Literal(part.to_string()),
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Structural identity of the pattern: literals kept, parameter names
    /// erased. Two patterns with the same shape match the same paths.
    pub fn shape(&self) -> Vec<Option<&str>> {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(lit) => Some(lit.as_str()),
                Segment::Param(_) => None,
            })
            .collect()
    }

    /// Match a request path. Returns the bound parameters on success.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let rest = path.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest.is_empty() {
            return self.segments.is_empty().then(PathParams::default);
        }

        let mut params = PathParams::default();
        let mut parts = rest.split('/');
        for segment in &self.segments {
            let part = parts.next()?;
            if part.is_empty() {
                return None;
            }
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.push(name.clone(), decode_component(part)),
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }
}

/// Percent-decode a bound parameter. Text that does not decode to UTF-8
/// is bound as written.
fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Named parameters bound by a successful match, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    entries: Vec<(String, String)>,
}

impl PathParams {
    fn push(&mut self, name: String, value: String) {
        self.entries.push((name, value));
    }

    /// Value bound to `name`, if the template declared it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
