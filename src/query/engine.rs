use chrono::{Duration, Utc};
use rand::Rng;
use std::time::Instant;
use tracing::debug;

use super::types::{QueryAggregations, QueryKind, QueryRecord, QueryRequest, QueryResponse};
use crate::domain::EnergySource;
use crate::simulation::{gaussian, SignalModel, ZoneGrid};
use crate::utils::{round2, unit_ratio};

/// Row cap for hourly query kinds, whatever the requested range
pub const MAX_HOURLY_ROWS: usize = 48;

pub const UNKNOWN_QUERY_MESSAGE: &str = "Unknown query type";

const DEFAULT_ZONE: &str = "Zone_A";

/// Dispatches ad-hoc queries to the generators and wraps the result in a
/// uniform envelope
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine {
    signal: SignalModel,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R, request: &QueryRequest) -> QueryResponse {
        let started = Instant::now();
        let hours = request.time_range().hours();
        let rows = hours.min(MAX_HOURLY_ROWS);

        let (results, aggregations) = match request.kind() {
            QueryKind::Efficiency => self.efficiency(rng),
            QueryKind::Demand => self.demand(rng, rows),
            QueryKind::Renewable => self.renewable(rng),
            QueryKind::Zone => self.zone(rng, rows, request.zone.as_deref()),
            QueryKind::Other(_) => (
                vec![QueryRecord::Unknown {
                    message: UNKNOWN_QUERY_MESSAGE,
                }],
                QueryAggregations::Empty {},
            ),
        };

        let query_time_ms = round2(started.elapsed().as_secs_f64() * 1000.0);
        debug!(
            query_type = %request.query_type,
            hours,
            metric = ?request.metric,
            records = results.len(),
            query_time_ms,
            "query executed"
        );

        QueryResponse {
            results,
            aggregations,
            query_time_ms,
        }
    }

    fn efficiency<R: Rng + ?Sized>(&self, rng: &mut R) -> (Vec<QueryRecord>, QueryAggregations) {
        let results = ZoneGrid
            .names()
            .map(|zone| QueryRecord::Efficiency {
                zone: zone.to_string(),
                avg_efficiency: unit_ratio(0.75 + gaussian(rng, 0.05)),
            })
            .collect();

        (
            results,
            QueryAggregations::Efficiency {
                overall_avg: 0.82,
                best_zone: "Zone_C",
                worst_zone: "Zone_F",
            },
        )
    }

    fn demand<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        rows: usize,
    ) -> (Vec<QueryRecord>, QueryAggregations) {
        let results = (0..rows)
            .map(|hour| QueryRecord::Demand {
                hour,
                demand_mw: self.signal.noisy(rng, 400.0, 50.0),
            })
            .collect();

        (
            results,
            QueryAggregations::Demand {
                peak_demand: 550.0,
                min_demand: 250.0,
                avg_demand: 400.0,
            },
        )
    }

    fn renewable<R: Rng + ?Sized>(&self, rng: &mut R) -> (Vec<QueryRecord>, QueryAggregations) {
        let outputs: Vec<(EnergySource, f64)> = EnergySource::ALL
            .iter()
            .map(|source| (*source, round2(rng.gen_range(1000.0..5000.0))))
            .collect();
        let total_renewable = round2(outputs.iter().map(|(_, kwh)| kwh).sum());

        let results = outputs
            .into_iter()
            .map(|(source, output_kwh)| QueryRecord::Renewable { source, output_kwh })
            .collect();

        (
            results,
            QueryAggregations::Renewable {
                total_renewable,
                renewable_ratio: 0.87,
            },
        )
    }

    /// Newest record first, one per hour back from now
    fn zone<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        rows: usize,
        zone: Option<&str>,
    ) -> (Vec<QueryRecord>, QueryAggregations) {
        let zone = zone.unwrap_or(DEFAULT_ZONE);
        let now = Utc::now();
        let results = (0..rows)
            .map(|i| QueryRecord::ZonePower {
                timestamp: now - Duration::hours(i as i64),
                power: self.signal.noisy(rng, 100.0, 20.0),
            })
            .collect();

        (
            results,
            QueryAggregations::Zone {
                zone: zone.to_string(),
                avg_power: 100.0,
                peak_power: 140.0,
            },
        )
    }
}
