use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

use crate::domain::EnergySource;

/// Dispatch key of an ad-hoc query. Unrecognised kinds are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum QueryKind {
    Efficiency,
    Demand,
    Renewable,
    Zone,
    #[strum(default)]
    Other(String),
}

impl QueryKind {
    pub fn from_token(token: &str) -> Self {
        QueryKind::from_str(token).unwrap_or_else(|_| QueryKind::Other(token.to_string()))
    }
}

/// Time-range token; unknown tokens fall back to the last 24 hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum TimeRange {
    #[strum(serialize = "1h")]
    LastHour,
    #[default]
    #[strum(serialize = "24h")]
    LastDay,
    #[strum(serialize = "7d")]
    LastWeek,
    #[strum(serialize = "30d")]
    LastMonth,
}

impl TimeRange {
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }

    pub fn hours(self) -> usize {
        match self {
            TimeRange::LastHour => 1,
            TimeRange::LastDay => 24,
            TimeRange::LastWeek => 168,
            TimeRange::LastMonth => 720,
        }
    }
}

/// Body of `POST /api/query/execute`
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub query_type: String,
    #[serde(default = "default_date_range")]
    pub date_range: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub metric: Option<String>,
}

fn default_date_range() -> Option<String> {
    Some("24h".to_string())
}

impl QueryRequest {
    pub fn new(query_type: impl Into<String>, date_range: impl Into<String>) -> Self {
        Self {
            query_type: query_type.into(),
            date_range: Some(date_range.into()),
            zone: None,
            metric: None,
        }
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    pub fn kind(&self) -> QueryKind {
        QueryKind::from_token(&self.query_type)
    }

    pub fn time_range(&self) -> TimeRange {
        self.date_range
            .as_deref()
            .map(TimeRange::from_token)
            .unwrap_or_default()
    }
}

/// One result row; the variant follows the query kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryRecord {
    Efficiency { zone: String, avg_efficiency: f64 },
    Demand { hour: usize, demand_mw: f64 },
    Renewable { source: EnergySource, output_kwh: f64 },
    ZonePower { timestamp: DateTime<Utc>, power: f64 },
    Unknown { message: &'static str },
}

/// Summary scalars; `Empty` serializes as `{}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryAggregations {
    Efficiency {
        overall_avg: f64,
        best_zone: &'static str,
        worst_zone: &'static str,
    },
    Demand {
        peak_demand: f64,
        min_demand: f64,
        avg_demand: f64,
    },
    Renewable {
        total_renewable: f64,
        renewable_ratio: f64,
    },
    Zone {
        zone: String,
        avg_power: f64,
        peak_power: f64,
    },
    Empty {},
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub results: Vec<QueryRecord>,
    pub aggregations: QueryAggregations,
    pub query_time_ms: f64,
}
