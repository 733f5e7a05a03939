//! Service metadata: health and deployment info.

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;

use crate::payloads::clock::iso_timestamp;
use crate::payloads::random::int_in;

/// Reported application version.
pub const APP_VERSION: &str = "2.0.0";

/// Process facts fixed at start-up.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub environment: String,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
}

impl RuntimeInfo {
    pub fn new(environment: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            environment: environment.into(),
            version: APP_VERSION,
            started_at,
        }
    }

    /// Seconds elapsed since start-up, never negative.
    pub fn uptime_secs(&self, now: DateTime<Utc>) -> f64 {
        let millis = (now - self.started_at).num_milliseconds().max(0);
        millis as f64 / 1000.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
    pub environment: String,
    pub uptime: f64,
    pub version: &'static str,
}

pub fn health(runtime: &RuntimeInfo, now: DateTime<Utc>) -> Health {
    Health {
        status: "healthy",
        timestamp: iso_timestamp(now),
        environment: runtime.environment.clone(),
        uptime: runtime.uptime_secs(now),
        version: runtime.version,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeploymentInfo {
    pub app_name: &'static str,
    pub deployment_date: String,
    pub azure_region: &'static str,
    pub runtime: &'static str,
    pub deployed_by: &'static str,
    pub build_number: u32,
    pub git_commit: &'static str,
    pub status: &'static str,
}

/// Deployment summary; `build_number` is drawn from `[100, 1099]`.
pub fn deployment_info(now: DateTime<Utc>, rng: &mut dyn RngCore) -> DeploymentInfo {
    DeploymentInfo {
        app_name: "cts-vibeapp-2025",
        deployment_date: iso_timestamp(now),
        azure_region: "East US",
        runtime: "Rust (tokio + axum)",
        deployed_by: "CTS DevOps Team",
        build_number: int_in(rng, 100, 1099),
        git_commit: "abc123def456",
        status: "Successfully Deployed ✅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_health_reports_uptime() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let runtime = RuntimeInfo::new("staging", start);

        let report = health(&runtime, start + Duration::milliseconds(90_500));
        assert_eq!(report.status, "healthy");
        assert_eq!(report.environment, "staging");
        assert_eq!(report.version, "2.0.0");
        assert_eq!(report.timestamp, "2025-03-01T12:01:30.500Z");
        assert!((report.uptime - 90.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uptime_clamps_clock_skew() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let runtime = RuntimeInfo::new("development", start);
        assert_eq!(runtime.uptime_secs(start - Duration::seconds(5)), 0.0);
    }

    #[test]
    fn test_build_number_range() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let info = deployment_info(now, &mut rng);
            assert!((100..=1099).contains(&info.build_number));
        }
    }
}
