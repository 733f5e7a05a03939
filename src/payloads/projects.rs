//! Project portfolio status.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStatus {
    pub name: &'static str,
    pub progress: u8,
    pub status: &'static str,
    pub priority: &'static str,
}

pub fn project_status() -> Vec<ProjectStatus> {
    vec![
        ProjectStatus { name: "Azure Migration", progress: 85, status: "On Track", priority: "High" },
        ProjectStatus { name: "API Modernization", progress: 67, status: "In Progress", priority: "Medium" },
        ProjectStatus { name: "Security Enhancement", progress: 92, status: "Almost Done", priority: "High" },
        ProjectStatus { name: "Mobile App Update", progress: 45, status: "In Progress", priority: "Low" },
    ]
}
