//! The applications served by this crate. Each is a route table plus the
//! renderer for its pages; the HTTP stack around them is shared.

pub mod time_converter;
pub mod vibe;

use std::sync::Arc;

use crate::routing::RouteTable;
use crate::views::Renderer;

/// A complete application ready to be served.
pub struct Site {
    pub name: &'static str,
    pub table: RouteTable,
    pub renderer: Arc<dyn Renderer>,
}
