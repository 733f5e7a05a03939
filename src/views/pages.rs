//! Context builders for every page the sites render.

use chrono::{DateTime, Local, Utc};
use serde_json::{json, Value};

use crate::payloads::clock::{local_date, local_datetime};
use crate::payloads::system::APP_VERSION;
use crate::payloads::team::team_stats;
use crate::views::ViewContext;

pub const SITE_NAME: &str = "CTS VibeApp";

pub const ABOUT_FEATURES: [&str; 6] = [
    "Real-time Team Dashboard",
    "Project Status Tracking",
    "Team Wellness Monitoring",
    "Azure Cloud Integration",
    "Responsive Design",
    "REST API Endpoints",
];

fn into_context(value: Value) -> ViewContext {
    match value {
        Value::Object(map) => map,
        other => {
            let mut map = ViewContext::new();
            map.insert("value".to_string(), other);
            map
        }
    }
}

/// A page that only needs its title.
pub fn titled(title: &str) -> ViewContext {
    into_context(json!({ "title": title }))
}

/// Landing page: headline stats and the current local time.
pub fn index(now: DateTime<Utc>) -> Result<ViewContext, serde_json::Error> {
    Ok(into_context(json!({
        "title": "CTS VibeApp - Team Productivity Hub",
        "message": "Welcome to CTS VibeApp!",
        "stats": serde_json::to_value(team_stats())?,
        "currentTime": local_datetime(now),
    })))
}

pub fn about(now: DateTime<Utc>) -> ViewContext {
    into_context(json!({
        "title": "About - CTS VibeApp",
        "deploymentInfo": {
            "version": APP_VERSION,
            "deployedOn": local_date(now),
            "features": ABOUT_FEATURES,
        },
    }))
}

pub fn not_found(path: &str) -> ViewContext {
    into_context(json!({
        "title": "404 - Page Not Found",
        "path": path,
    }))
}

/// Landing page of the time-converter app: `YYYY-MM-DD HH:mm:ss`, local.
pub fn time_converter_index(now: DateTime<Utc>) -> ViewContext {
    into_context(json!({
        "title": "Global Time Converter",
        "currentTime": now.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
    }))
}
