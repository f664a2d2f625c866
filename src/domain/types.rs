use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// ============================================================================
// Series
// ============================================================================

/// Semantic metric carried by a [`Series`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    Demand,
    Generation,
    SolarOutput,
    WindOutput,
}

/// One generated sample; values are never negative
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Ordered samples of one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub metric: Metric,
    pub points: Vec<SamplePoint>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bare values in chronological order (sparklines, prediction arrays)
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

// ============================================================================
// Heatmap
// ============================================================================

/// Zone x time matrix of power and efficiency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapMatrix {
    pub zones: Vec<String>,
    pub timestamps: Vec<DateTime<Utc>>,
    #[serde(rename = "power_values")]
    pub power: Vec<Vec<f64>>,
    /// Clamped to [0, 1]
    #[serde(rename = "efficiency_values")]
    pub efficiency: Vec<Vec<f64>>,
}

impl HeatmapMatrix {
    /// (zone rows, time columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.zones.len(), self.timestamps.len())
    }

    pub fn zone_mean_power(&self, zone_index: usize) -> Option<f64> {
        self.power.get(zone_index).and_then(|row| mean(row))
    }

    pub fn zone_mean_efficiency(&self, zone_index: usize) -> Option<f64> {
        self.efficiency.get(zone_index).and_then(|row| mean(row))
    }
}

// ============================================================================
// Neuromorphic display records
// ============================================================================

/// Spike activity of one logical sensor group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeGroup {
    #[serde(rename = "neuron_group")]
    pub group: String,
    /// Ascending, within the normalized [0, 100] window
    pub spike_times: Vec<f64>,
    pub firing_rate: f64,
    pub membrane_potential: f64,
}

// ============================================================================
// Status enums
// ============================================================================

/// Instantaneous zone status on the realtime grid snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ZoneStatus {
    Optimal,
    Nominal,
    HighDemand,
}

impl ZoneStatus {
    pub const ALL: [ZoneStatus; 3] = [ZoneStatus::Optimal, ZoneStatus::Nominal, ZoneStatus::HighDemand];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Load classification shown on the realtime heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LoadStatus {
    Optimal,
    Nominal,
    HighLoad,
    LowLoad,
}

impl LoadStatus {
    pub const ALL: [LoadStatus; 4] = [
        LoadStatus::Optimal,
        LoadStatus::Nominal,
        LoadStatus::HighLoad,
        LoadStatus::LowLoad,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Renewable source catalog shared by queries and the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnergySource {
    Solar,
    Wind,
    Hydro,
    Geothermal,
}

impl EnergySource {
    pub const ALL: [EnergySource; 4] = [
        EnergySource::Solar,
        EnergySource::Wind,
        EnergySource::Hydro,
        EnergySource::Geothermal,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
