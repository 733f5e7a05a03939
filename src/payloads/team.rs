//! Team-level payloads: mood, headline stats, per-employee performance.

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;

use crate::payloads::clock::iso_timestamp;
use crate::payloads::random::{decimal_in, int_in, pick};
use crate::payloads::PayloadError;

pub const MOODS: [&str; 8] = ["😊", "😐", "😔", "🚀", "💪", "🎯", "☕", "🔥"];

pub const RATINGS: [&str; 4] = [
    "Outstanding",
    "Exceeds Expectations",
    "Meets Expectations",
    "Developing",
];

#[derive(Debug, Clone, Serialize)]
pub struct TeamMood {
    pub current_mood: &'static str,
    pub team_energy: u32,
    pub productivity_score: String,
    pub timestamp: String,
}

/// Random mood snapshot: energy in `[1, 100]`, score `"d.d"` in `[0.0, 10.0]`.
pub fn team_mood(now: DateTime<Utc>, rng: &mut dyn RngCore) -> Result<TeamMood, PayloadError> {
    let current_mood = *pick(rng, &MOODS).ok_or(PayloadError::EmptyChoice("current_mood"))?;
    Ok(TeamMood {
        current_mood,
        team_energy: int_in(rng, 1, 100),
        productivity_score: decimal_in(rng, 0.0, 10.0),
        timestamp: iso_timestamp(now),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub total_members: u32,
    pub active_projects: u32,
    pub completed_sprints: u32,
    pub wellness_score: f64,
}

pub fn team_stats() -> TeamStats {
    TeamStats {
        total_members: 247,
        active_projects: 12,
        completed_sprints: 89,
        wellness_score: 8.7,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeePerformance {
    pub employee_id: String,
    pub rating: &'static str,
    pub tasks_completed: u32,
    pub on_time_delivery: u32,
    pub peer_feedback_score: String,
    pub review_period: &'static str,
    pub last_updated: String,
}

/// Performance card for `employee_id`, echoed back exactly as given.
pub fn employee_performance(
    employee_id: &str,
    now: DateTime<Utc>,
    rng: &mut dyn RngCore,
) -> Result<EmployeePerformance, PayloadError> {
    let rating = *pick(rng, &RATINGS).ok_or(PayloadError::EmptyChoice("rating"))?;
    Ok(EmployeePerformance {
        employee_id: employee_id.to_string(),
        rating,
        tasks_completed: int_in(rng, 20, 80),
        on_time_delivery: int_in(rng, 80, 100),
        peer_feedback_score: decimal_in(rng, 3.0, 5.0),
        review_period: "Q3 2025",
        last_updated: iso_timestamp(now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 5, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_team_mood_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let mood = team_mood(now(), &mut rng).unwrap();
            assert!(MOODS.contains(&mood.current_mood));
            assert!((1..=100).contains(&mood.team_energy));
            let score: f64 = mood.productivity_score.parse().unwrap();
            assert!((0.0..=10.0).contains(&score));
            assert_eq!(mood.timestamp, "2025-05-05T08:00:00.000Z");
        }
    }

    #[test]
    fn test_team_stats_field_names() {
        let value = serde_json::to_value(team_stats()).unwrap();
        assert_eq!(value["totalMembers"], 247);
        assert_eq!(value["activeProjects"], 12);
        assert_eq!(value["completedSprints"], 89);
        assert_eq!(value["wellnessScore"], 8.7);
    }

    #[test]
    fn test_employee_id_is_echoed_verbatim() {
        let mut rng = StdRng::seed_from_u64(9);
        let card = employee_performance("0042", now(), &mut rng).unwrap();
        assert_eq!(card.employee_id, "0042");
        assert!(RATINGS.contains(&card.rating));
        assert!((20..=80).contains(&card.tasks_completed));
        assert!((80..=100).contains(&card.on_time_delivery));
        let feedback: f64 = card.peer_feedback_score.parse().unwrap();
        assert!((3.0..=5.0).contains(&feedback));
    }
}
