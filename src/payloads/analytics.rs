//! Analytics overview. The numbers are illustrative, not computed.

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;

use crate::payloads::clock::iso_timestamp;
use crate::payloads::random::int_in;

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPoint {
    pub week: &'static str,
    pub completed: u32,
    pub planned: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopPerformer {
    pub name: &'static str,
    pub tasks_completed: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsOverview {
    pub period: &'static str,
    pub tasks_completed: u32,
    pub average_completion_hours: f64,
    pub on_time_rate: f64,
    pub team_velocity: Vec<WeeklyPoint>,
    pub top_performers: Vec<TopPerformer>,
    pub active_users_now: u32,
    pub generated_at: String,
}

/// Fixed KPIs plus a live-looking `active_users_now` in `[150, 247]`.
pub fn analytics_overview(now: DateTime<Utc>, rng: &mut dyn RngCore) -> AnalyticsOverview {
    AnalyticsOverview {
        period: "last_30_days",
        tasks_completed: 342,
        average_completion_hours: 18.5,
        on_time_rate: 0.91,
        team_velocity: vec![
            WeeklyPoint { week: "W1", completed: 78, planned: 85 },
            WeeklyPoint { week: "W2", completed: 91, planned: 90 },
            WeeklyPoint { week: "W3", completed: 84, planned: 88 },
            WeeklyPoint { week: "W4", completed: 89, planned: 92 },
        ],
        top_performers: vec![
            TopPerformer { name: "Sarah Johnson", tasks_completed: 41 },
            TopPerformer { name: "Mike Chen", tasks_completed: 38 },
            TopPerformer { name: "Emily Davis", tasks_completed: 35 },
        ],
        active_users_now: int_in(rng, 150, 247),
        generated_at: iso_timestamp(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_velocity_sums_to_total() {
        let now = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let overview = analytics_overview(now, &mut rng);

        let completed: u32 = overview.team_velocity.iter().map(|w| w.completed).sum();
        assert_eq!(completed, overview.tasks_completed);
        assert!((150..=247).contains(&overview.active_users_now));
    }
}
