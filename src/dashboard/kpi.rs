//! Headline KPIs and range aggregations.

use rand::Rng;
use serde::Serialize;

use crate::domain::Metric;
use crate::query::{TimeRange, MAX_HOURLY_ROWS};
use crate::simulation::{gaussian, SeriesGenerator};
use crate::utils::{round2, unit_ratio};

pub const SPARKLINE_POINTS: usize = 24;

#[derive(Debug, Clone, Serialize)]
pub struct KpiSummary {
    pub total_renewable_output: f64,
    pub grid_uptime: f64,
    pub efficiency_gain: f64,
    pub co2_savings: f64,
    pub megapack_capacity: f64,
    pub peak_demand_handled: f64,
    pub sparkline_data: Vec<f64>,
}

pub fn kpi_summary<R: Rng + ?Sized>(rng: &mut R) -> KpiSummary {
    KpiSummary {
        total_renewable_output: round2(rng.gen_range(450.0..550.0)),
        grid_uptime: round2(99.5 + rng.gen_range(0.0..0.5)),
        efficiency_gain: round2(25.0 + rng.gen_range(0.0..10.0)),
        co2_savings: round2(1200.0 + rng.gen_range(0.0..300.0)),
        megapack_capacity: round2(rng.gen_range(70.0..95.0)),
        peak_demand_handled: round2(rng.gen_range(85.0..98.0)),
        sparkline_data: SeriesGenerator::new(Metric::Generation, 100.0, 15.0)
            .generate(rng, SPARKLINE_POINTS)
            .values(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiAggregates {
    pub avg_efficiency: f64,
    pub max_demand: f64,
    pub min_demand: f64,
    pub total_renewable_kwh: f64,
    pub peak_solar_output: f64,
    pub peak_wind_output: f64,
    pub uptime_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiTimeSeries {
    pub demand: Vec<f64>,
    pub generation: Vec<f64>,
    pub efficiency: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiAggregations {
    /// Echoed verbatim, even when the token is unknown
    pub date_range: String,
    pub aggregations: KpiAggregates,
    pub time_series: KpiTimeSeries,
}

pub fn kpi_aggregations<R: Rng + ?Sized>(rng: &mut R, date_range: &str) -> KpiAggregations {
    let hours = TimeRange::from_token(date_range).hours();
    let points = hours.min(MAX_HOURLY_ROWS);

    let aggregations = KpiAggregates {
        avg_efficiency: unit_ratio(0.82 + gaussian(rng, 0.03)),
        max_demand: round2(550.0 + rng.gen_range(0.0..100.0)),
        min_demand: round2(200.0 + rng.gen_range(0.0..50.0)),
        total_renewable_kwh: round2(hours as f64 * 450.0 + rng.gen_range(0.0..1000.0)),
        peak_solar_output: round2(120.0 + rng.gen_range(0.0..30.0)),
        peak_wind_output: round2(90.0 + rng.gen_range(0.0..25.0)),
        uptime_percentage: round2(99.5 + rng.gen_range(0.0..0.5)),
    };

    let time_series = KpiTimeSeries {
        demand: SeriesGenerator::new(Metric::Demand, 400.0, 50.0)
            .generate(rng, points)
            .values(),
        generation: SeriesGenerator::new(Metric::Generation, 450.0, 40.0)
            .generate(rng, points)
            .values(),
        efficiency: (0..points)
            .map(|_| unit_ratio(0.75 + gaussian(rng, 0.05)))
            .collect(),
    };

    KpiAggregations {
        date_range: date_range.to_string(),
        aggregations,
        time_series,
    }
}
