//! Report export. Nothing is generated; the response only describes a
//! file that would exist.

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;

use crate::payloads::clock::{epoch_millis, iso_timestamp};
use crate::payloads::random::{decimal_in, int_in};

#[derive(Debug, Clone, Serialize)]
pub struct PdfReport {
    pub message: String,
    pub download_url: String,
    pub report_size: String,
    pub pages: u32,
    pub generated_at: String,
}

pub fn pdf_report(report_type: &str, now: DateTime<Utc>, rng: &mut dyn RngCore) -> PdfReport {
    PdfReport {
        message: format!("{} report generated successfully", report_type),
        download_url: format!(
            "/downloads/reports/{}-report-{}.pdf",
            report_type,
            epoch_millis(now)
        ),
        report_size: format!("{} MB", decimal_in(rng, 0.5, 5.0)),
        pages: int_in(rng, 5, 50),
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
    fn test_report_describes_type() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let report = pdf_report("quarterly", now, &mut rng);

        assert_eq!(report.message, "quarterly report generated successfully");
        assert_eq!(
            report.download_url,
            "/downloads/reports/quarterly-report-1735689600000.pdf"
        );
        assert!((5..=50).contains(&report.pages));

        let size: f64 = report.report_size.trim_end_matches(" MB").parse().unwrap();
        assert!((0.5..=5.0).contains(&size));
    }
}
