//! Team chat feed.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: &'static str,
    pub avatar: &'static str,
    pub message: &'static str,
    pub timestamp: &'static str,
    pub channel: &'static str,
}

pub fn chat_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: 1,
            sender: "Sarah Johnson",
            avatar: "SJ",
            message: "Good morning team! Azure migration is on track for Friday 🚀",
            timestamp: "09:15 AM",
            channel: "general",
        },
        ChatMessage {
            id: 2,
            sender: "Mike Chen",
            avatar: "MC",
            message: "Security audit findings are in the shared folder.",
            timestamp: "09:32 AM",
            channel: "security",
        },
        ChatMessage {
            id: 3,
            sender: "Emily Davis",
            avatar: "ED",
            message: "Reminder: wellness survey closes today ☕",
            timestamp: "10:05 AM",
            channel: "general",
        },
        ChatMessage {
            id: 4,
            sender: "Alex Kumar",
            avatar: "AK",
            message: "New mobile mockups are ready for review.",
            timestamp: "11:20 AM",
            channel: "design",
        },
    ]
}
