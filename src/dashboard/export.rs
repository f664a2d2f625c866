//! CSV export rows and the canned performance report.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use std::str::FromStr;
use strum::EnumString;

use crate::simulation::ZoneGrid;
use crate::utils::{round2, round3};

pub const EXPORT_HOURS: usize = 24;
pub const EXPORT_ZONES: usize = 3;
pub const UNSUPPORTED_EXPORT_MESSAGE: &str = "Unknown data type";

pub const CSV_HEADERS: [&str; 6] = [
    "timestamp",
    "zone",
    "solar_output",
    "wind_output",
    "demand",
    "efficiency",
];

#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ExportKind {
    Metrics,
    #[strum(default)]
    Other(String),
}

impl ExportKind {
    pub fn from_token(token: &str) -> Self {
        ExportKind::from_str(token).unwrap_or_else(|_| ExportKind::Other(token.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CsvRow {
    pub timestamp: DateTime<Utc>,
    pub zone: &'static str,
    pub solar_output: f64,
    pub wind_output: f64,
    pub demand: f64,
    pub efficiency: f64,
}

/// Unsupported kinds are a normal payload, not an error
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CsvExport {
    Table {
        headers: [&'static str; 6],
        rows: Vec<CsvRow>,
        filename: String,
    },
    Unsupported {
        error: &'static str,
    },
}

pub fn csv_export<R: Rng + ?Sized>(rng: &mut R, data_type: &str) -> CsvExport {
    csv_export_at(rng, data_type, Utc::now())
}

pub fn csv_export_at<R: Rng + ?Sized>(
    rng: &mut R,
    data_type: &str,
    now: DateTime<Utc>,
) -> CsvExport {
    match ExportKind::from_token(data_type) {
        ExportKind::Metrics => CsvExport::Table {
            headers: CSV_HEADERS,
            rows: metric_rows(rng, now),
            filename: format!("metrics_export_{}.csv", now.format("%Y%m%d_%H%M%S")),
        },
        ExportKind::Other(_) => CsvExport::Unsupported {
            error: UNSUPPORTED_EXPORT_MESSAGE,
        },
    }
}

fn metric_rows<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<CsvRow> {
    let zones: Vec<&'static str> = ZoneGrid.names().take(EXPORT_ZONES).collect();
    let mut rows = Vec::with_capacity(EXPORT_HOURS * zones.len());

    for i in 0..EXPORT_HOURS {
        let timestamp = now - Duration::hours(i as i64);
        for &zone in &zones {
            rows.push(CsvRow {
                timestamp,
                zone,
                solar_output: round2(rng.gen_range(50.0..100.0)),
                wind_output: round2(rng.gen_range(40.0..80.0)),
                demand: round2(rng.gen_range(100.0..200.0)),
                efficiency: round3(rng.gen_range(0.7..0.95)),
            });
        }
    }
    rows
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub grid_uptime: &'static str,
    pub efficiency_gain: &'static str,
    pub renewable_ratio: &'static str,
    pub co2_savings: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub report_title: &'static str,
    pub generated_at: DateTime<Utc>,
    pub period: &'static str,
    pub summary: ReportSummary,
    pub highlights: [&'static str; 4],
    pub recommendations: [&'static str; 3],
}

pub fn report() -> Report {
    Report {
        report_title: "Energy-Morph Grid Performance Report",
        generated_at: Utc::now(),
        period: "Last 24 Hours",
        summary: ReportSummary {
            grid_uptime: "99.7%",
            efficiency_gain: "+30%",
            renewable_ratio: "87%",
            co2_savings: "1,450 tons",
        },
        highlights: [
            "Peak demand of 542 MW handled successfully at 14:00",
            "Solar output exceeded forecast by 12%",
            "Megapack discharge optimized for peak shaving",
            "SNN predictions achieved 92% accuracy",
        ],
        recommendations: [
            "Consider expanding Zone_C capacity",
            "Wind turbine maintenance recommended for Unit 7",
            "Storage optimization potential in overnight hours",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[test]
    fn test_metrics_export_layout() {
        let mut rng = StdRng::seed_from_u64(18);
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();

        let CsvExport::Table { headers, rows, filename } = csv_export_at(&mut rng, "metrics", now)
        else {
            panic!("metrics export should produce a table");
        };

        assert_eq!(headers.len(), 6);
        assert_eq!(filename, "metrics_export_20240309_070501.csv");
        assert_eq!(rows.len(), 72);
        assert_eq!(rows[0].timestamp, now);
        assert_eq!(
            rows.iter().take(3).map(|r| r.zone).collect::<Vec<_>>(),
            ["Zone_A", "Zone_B", "Zone_C"]
        );
        assert_eq!(rows[71].timestamp, now - Duration::hours(23));
        for row in &rows {
            assert!((50.0..=100.0).contains(&row.solar_output));
            assert!((0.7..=0.95).contains(&row.efficiency));
        }
    }

    #[rstest]
    #[case("")]
    #[case("Metrics")]
    #[case("transactions")]
    fn test_unsupported_export(#[case] data_type: &str) {
        let mut rng = StdRng::seed_from_u64(19);
        let json = serde_json::to_value(csv_export(&mut rng, data_type)).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Unknown data type"}));
    }

    #[test]
    fn test_report_is_fixed() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["report_title"], "Energy-Morph Grid Performance Report");
        assert_eq!(json["period"], "Last 24 Hours");
        assert_eq!(json["highlights"].as_array().unwrap().len(), 4);
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 3);
        assert_eq!(json["summary"]["co2_savings"], "1,450 tons");
    }
}
