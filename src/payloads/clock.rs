//! Wall-clock access for payload generators.

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// RFC 3339 UTC with millisecond precision, e.g. `2025-01-31T09:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Calendar date in UTC, `YYYY-MM-DD`.
pub fn iso_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Milliseconds since the Unix epoch.
pub fn epoch_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

/// Human-readable local date and time, e.g. `1/31/2025, 9:30:00 AM`.
pub fn local_datetime(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Human-readable local date, e.g. `1/31/2025`.
pub fn local_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_formats() {
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 9, 30, 0).unwrap();
        assert_eq!(iso_timestamp(at), "2025-01-31T09:30:00.000Z");
        assert_eq!(iso_date(at), "2025-01-31");
        assert_eq!(epoch_millis(at), 1_738_315_800_000);
    }

    #[test]
    fn test_fixed_clock_is_frozen() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), clock.now());
    }
}
