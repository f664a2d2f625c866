//! Query-string parameters shared by several endpoints.

use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_HOURS: usize = 24;
pub const MAX_HOURS: usize = 168;
pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_TRANSACTIONS: usize = 100;

#[derive(Debug, Deserialize, Validate)]
pub struct HoursQuery {
    #[serde(default = "default_hours")]
    #[validate(range(max = MAX_HOURS))]
    pub hours: usize,
}

fn default_hours() -> usize {
    DEFAULT_HOURS
}

#[derive(Debug, Deserialize, Validate)]
pub struct LimitQuery {
    #[serde(default = "default_limit")]
    #[validate(range(max = MAX_TRANSACTIONS))]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    #[serde(default = "default_date_range")]
    pub date_range: String,
}

fn default_date_range() -> String {
    "24h".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default = "default_data_type")]
    pub data_type: String,
}

fn default_data_type() -> String {
    "metrics".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SimulateQuery {
    pub scenario_id: Option<String>,
}
