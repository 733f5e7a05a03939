//! Global Time Converter: a single page showing the current local time.

use std::sync::Arc;

use crate::routing::{HandlerError, Reply, RequestContext, RouteError, RouteTable};
use crate::sites::Site;
use crate::views::pages;
use crate::views::HtmlRenderer;

pub const SITE_NAME: &str = "Global Time Converter";

pub const VIEWS: [&str; 2] = ["index", "404"];

pub fn route_table() -> Result<RouteTable, RouteError> {
    RouteTable::builder().get("/", "index", index).build()
}

pub fn site() -> Result<Site, RouteError> {
    Ok(Site {
        name: SITE_NAME,
        table: route_table()?,
        renderer: Arc::new(HtmlRenderer::new(SITE_NAME, &VIEWS)),
    })
}

fn index(ctx: &mut RequestContext<'_>) -> Result<Reply, HandlerError> {
    Ok(Reply::view("index", pages::time_converter_index(ctx.clock.now())))
}
