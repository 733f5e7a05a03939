//! Notification inbox.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inbox {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

pub fn notifications() -> Inbox {
    let notifications = vec![
        Notification {
            id: 1,
            kind: "deployment",
            title: "Deployment succeeded",
            message: "Build deployed to East US.",
            read: false,
        },
        Notification {
            id: 2,
            kind: "task",
            title: "Task assigned",
            message: "You were assigned \"Review API security audit\".",
            read: false,
        },
        Notification {
            id: 3,
            kind: "wellness",
            title: "Wellness check-in",
            message: "Take five minutes for the weekly wellness survey.",
            read: true,
        },
        Notification {
            id: 4,
            kind: "meeting",
            title: "Sprint review",
            message: "Sprint review starts at 3:00 PM.",
            read: false,
        },
    ];
    let unread_count = notifications.iter().filter(|n| !n.read).count();

    Inbox {
        notifications,
        unread_count,
    }
}
