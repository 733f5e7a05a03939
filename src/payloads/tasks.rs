//! Task board payloads.
//!
//! Creating a task builds the record and hands it back; nothing is kept,
//! so the listing never changes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::payloads::clock::{epoch_millis, iso_date};

pub const DEFAULT_TITLE: &str = "New Task";
pub const DEFAULT_ASSIGNEE: &str = "Unassigned";
pub const DEFAULT_PRIORITY: &str = "Medium";
pub const NEW_TASK_STATUS: &str = "Pending";

/// A task record. Text fields are JSON values because a created task
/// echoes whatever the client sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: Value,
    pub assignee: Value,
    pub priority: Value,
    pub status: String,
    #[serde(rename = "dueDate")]
    pub due_date: Value,
}

fn task(id: i64, title: &str, assignee: &str, priority: &str, status: &str, due: &str) -> Task {
    Task {
        id,
        title: title.into(),
        assignee: assignee.into(),
        priority: priority.into(),
        status: status.to_string(),
        due_date: due.into(),
    }
}

/// The fixed task board, optionally narrowed to one status
/// (case-insensitive).
pub fn list_tasks(status: Option<&str>) -> Vec<Task> {
    let all = vec![
        task(1, "Complete Azure migration plan", "Sarah Johnson", "High", "In Progress", "2025-02-15"),
        task(2, "Review API security audit", "Mike Chen", "High", "Pending", "2025-02-10"),
        task(3, "Update team wellness survey", "Emily Davis", "Medium", "Completed", "2025-02-05"),
        task(4, "Mobile app UI refresh", "Alex Kumar", "Low", "In Progress", "2025-03-01"),
        task(5, "Sprint retrospective notes", "Jordan Lee", "Medium", "Pending", "2025-02-08"),
    ];

    match status {
        Some(wanted) => all
            .into_iter()
            .filter(|t| t.status.eq_ignore_ascii_case(wanted))
            .collect(),
        None => all,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCreated {
    pub message: &'static str,
    pub task: Task,
}

/// Build a new task from a request body. Absent or `null` fields take
/// their defaults; present fields are echoed unchanged.
pub fn create_task(body: &Value, now: DateTime<Utc>) -> TaskCreated {
    let field = |name: &str, default: String| -> Value {
        body.get(name)
            .filter(|v| !v.is_null())
            .cloned()
            .unwrap_or(Value::String(default))
    };

    TaskCreated {
        message: "Task created successfully",
        task: Task {
            id: epoch_millis(now),
            title: field("title", DEFAULT_TITLE.to_string()),
            assignee: field("assignee", DEFAULT_ASSIGNEE.to_string()),
            priority: field("priority", DEFAULT_PRIORITY.to_string()),
            status: NEW_TASK_STATUS.to_string(),
            due_date: field("dueDate", iso_date(now)),
        },
    }
}
