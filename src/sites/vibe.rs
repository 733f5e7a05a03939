//! The team productivity hub: pages plus the `/api` mock endpoints.
//!
//! Registration order below is the matching order.

use std::sync::Arc;

use crate::payloads::{analytics, chat, notifications, projects, reports, system, tasks, team};
use crate::routing::{HandlerError, Reply, RequestContext, RouteError, RouteTable};
use crate::sites::Site;
use crate::views::pages::{self, SITE_NAME};
use crate::views::HtmlRenderer;

/// Every view this site can render.
pub const VIEWS: [&str; 10] = [
    "index",
    "dashboard",
    "wellness",
    "projects",
    "about",
    "tasks",
    "chat",
    "analytics",
    "notifications",
    "404",
];

type HandlerResult = Result<Reply, HandlerError>;

pub fn route_table() -> Result<RouteTable, RouteError> {
    RouteTable::builder()
        // Pages
        .get("/", "index", index)
        .get("/dashboard", "dashboard", dashboard)
        .get("/wellness", "wellness", wellness)
        .get("/projects", "projects", projects_page)
        .get("/about", "about", about)
        .get("/tasks", "tasks", tasks_page)
        .get("/chat", "chat", chat_page)
        .get("/analytics", "analytics", analytics_page)
        .get("/notifications", "notifications", notifications_page)
        // API
        .get("/api/health", "health", health)
        .get("/api/team-mood", "team-mood", team_mood)
        .get("/api/team-stats", "team-stats", team_stats)
        .get("/api/project-status", "project-status", project_status)
        .get("/api/deployment-info", "deployment-info", deployment_info)
        .get("/api/tasks", "list-tasks", list_tasks)
        .post("/api/tasks", "create-task", create_task)
        .get("/api/chat/messages", "chat-messages", chat_messages)
        .get("/api/analytics/overview", "analytics-overview", analytics_overview)
        .get("/api/notifications", "notifications-feed", notification_feed)
        .get("/api/employee-performance/:id", "employee-performance", employee_performance)
        .get("/api/export/pdf-report/:type", "pdf-report", pdf_report)
        .build()
}

pub fn site() -> Result<Site, RouteError> {
    Ok(Site {
        name: SITE_NAME,
        table: route_table()?,
        renderer: Arc::new(HtmlRenderer::new(SITE_NAME, &VIEWS)),
    })
}

// Pages

fn index(ctx: &mut RequestContext<'_>) -> HandlerResult {
    Ok(Reply::view("index", pages::index(ctx.clock.now())?))
}

fn dashboard(_: &mut RequestContext<'_>) -> HandlerResult {
    Ok(Reply::view("dashboard", pages::titled("Team Dashboard - CTS VibeApp")))
}

fn wellness(_: &mut RequestContext<'_>) -> HandlerResult {
    Ok(Reply::view("wellness", pages::titled("Team Wellness - CTS VibeApp")))
}

fn projects_page(_: &mut RequestContext<'_>) -> HandlerResult {
    Ok(Reply::view("projects", pages::titled("Project Status - CTS VibeApp")))
}

fn about(ctx: &mut RequestContext<'_>) -> HandlerResult {
    Ok(Reply::view("about", pages::about(ctx.clock.now())))
}

fn tasks_page(_: &mut RequestContext<'_>) -> HandlerResult {
    Ok(Reply::view("tasks", pages::titled("Task Board - CTS VibeApp")))
}

fn chat_page(_: &mut RequestContext<'_>) -> HandlerResult {
    Ok(Reply::view("chat", pages::titled("Team Chat - CTS VibeApp")))
}

fn analytics_page(_: &mut RequestContext<'_>) -> HandlerResult {
    Ok(Reply::view("analytics", pages::titled("Analytics - CTS VibeApp")))
}

fn notifications_page(_: &mut RequestContext<'_>) -> HandlerResult {
    Ok(Reply::view("notifications", pages::titled("Notifications - CTS VibeApp")))
}

// API

fn health(ctx: &mut RequestContext<'_>) -> HandlerResult {
    Reply::json(&system::health(ctx.runtime, ctx.clock.now()))
}

fn team_mood(ctx: &mut RequestContext<'_>) -> HandlerResult {
    let now = ctx.clock.now();
    Reply::json(&team::team_mood(now, ctx.rng)?)
}

fn team_stats(_: &mut RequestContext<'_>) -> HandlerResult {
    Reply::json(&team::team_stats())
}

fn project_status(_: &mut RequestContext<'_>) -> HandlerResult {
    Reply::json(&projects::project_status())
}

fn deployment_info(ctx: &mut RequestContext<'_>) -> HandlerResult {
    let now = ctx.clock.now();
    Reply::json(&system::deployment_info(now, ctx.rng))
}

fn list_tasks(ctx: &mut RequestContext<'_>) -> HandlerResult {
    Reply::json(&tasks::list_tasks(ctx.query.get("status")))
}

fn create_task(ctx: &mut RequestContext<'_>) -> HandlerResult {
    Reply::created(&tasks::create_task(ctx.body, ctx.clock.now()))
}

fn chat_messages(_: &mut RequestContext<'_>) -> HandlerResult {
    Reply::json(&chat::chat_messages())
}

fn analytics_overview(ctx: &mut RequestContext<'_>) -> HandlerResult {
    let now = ctx.clock.now();
    Reply::json(&analytics::analytics_overview(now, ctx.rng))
}

fn notification_feed(_: &mut RequestContext<'_>) -> HandlerResult {
    Reply::json(&notifications::notifications())
}

fn employee_performance(ctx: &mut RequestContext<'_>) -> HandlerResult {
    let id = ctx.param("id")?.to_string();
    let now = ctx.clock.now();
    Reply::json(&team::employee_performance(&id, now, ctx.rng)?)
}

fn pdf_report(ctx: &mut RequestContext<'_>) -> HandlerResult {
    let report_type = ctx.param("type")?.to_string();
    let now = ctx.clock.now();
    Reply::json(&reports::pdf_report(&report_type, now, ctx.rng))
}
