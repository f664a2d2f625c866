//! Grid metrics history and realtime snapshots.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::random_id;
use crate::domain::{LoadStatus, ZoneStatus};
use crate::simulation::{gaussian, hourly_timestamps, SignalModel, ZoneGrid, DAY_STEPS};
use crate::utils::{round2, round3, unit_ratio};

/// One zone's metrics for one hour
#[derive(Debug, Clone, Serialize)]
pub struct GridMetrics {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub solar_output: f64,
    pub wind_output: f64,
    pub megapack_charge: f64,
    pub grid_demand: f64,
    pub efficiency_ratio: f64,
    pub zone: &'static str,
}

/// Hour-major metrics for every zone, ending at the current time
pub fn grid_metrics<R: Rng + ?Sized>(rng: &mut R, hours: usize) -> Vec<GridMetrics> {
    grid_metrics_at(rng, hours, Utc::now())
}

pub fn grid_metrics_at<R: Rng + ?Sized>(
    rng: &mut R,
    hours: usize,
    now: DateTime<Utc>,
) -> Vec<GridMetrics> {
    let signal = SignalModel;
    let grid = ZoneGrid;
    let mut out = Vec::with_capacity(hours * ZoneGrid::COUNT);

    for (hour, timestamp) in hourly_timestamps(now, hours).into_iter().enumerate() {
        for zone in grid.zones() {
            out.push(GridMetrics {
                id: random_id(rng),
                timestamp,
                solar_output: signal.sample(rng, hour, DAY_STEPS, 80.0, 10.0),
                wind_output: signal.noisy(rng, 60.0, 15.0),
                megapack_charge: round2(rng.gen_range(40.0..95.0)),
                grid_demand: signal.sample(rng, hour, DAY_STEPS, 120.0, 20.0),
                efficiency_ratio: unit_ratio(0.75 + gaussian(rng, 0.05)),
                zone: zone.name,
            });
        }
    }
    out
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneSnapshot {
    pub power_output: f64,
    pub demand: f64,
    pub efficiency: f64,
    pub status: ZoneStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct RealtimeSnapshot {
    pub timestamp: DateTime<Utc>,
    pub total_generation: f64,
    pub total_demand: f64,
    pub grid_frequency: f64,
    pub zones: BTreeMap<&'static str, ZoneSnapshot>,
}

pub fn realtime_snapshot<R: Rng + ?Sized>(rng: &mut R) -> RealtimeSnapshot {
    let total_generation = round2(rng.gen_range(400.0..600.0));
    let total_demand = round2(rng.gen_range(350.0..550.0));
    let grid_frequency = round3(60.0 + gaussian(rng, 0.02));

    let zones = ZoneGrid
        .names()
        .map(|name| {
            let snapshot = ZoneSnapshot {
                power_output: round2(rng.gen_range(50.0..150.0)),
                demand: round2(rng.gen_range(40.0..140.0)),
                efficiency: round3(rng.gen_range(0.7..0.95)),
                status: ZoneStatus::random(rng),
            };
            (name, snapshot)
        })
        .collect();

    RealtimeSnapshot {
        timestamp: Utc::now(),
        total_generation,
        total_demand,
        grid_frequency,
        zones,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneHeat {
    pub power_level: f64,
    pub efficiency: f64,
    pub status: LoadStatus,
    pub color_intensity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RealtimeHeatmap {
    pub timestamp: DateTime<Utc>,
    pub zones: BTreeMap<&'static str, ZoneHeat>,
}

pub fn realtime_heatmap<R: Rng + ?Sized>(rng: &mut R) -> RealtimeHeatmap {
    let zones = ZoneGrid
        .names()
        .map(|name| {
            let heat = ZoneHeat {
                power_level: round2(rng.gen_range(30.0..100.0)),
                efficiency: round3(rng.gen_range(0.7..0.95)),
                status: LoadStatus::random(rng),
                color_intensity: round2(rng.gen_range(0.3..1.0)),
            };
            (name, heat)
        })
        .collect();

    RealtimeHeatmap {
        timestamp: Utc::now(),
        zones,
    }
}
