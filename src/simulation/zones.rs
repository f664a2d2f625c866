//! Fixed zone table of the synthetic grid.

use serde::Serialize;

/// Baseline power of the first zone
pub const BASELINE_OFFSET: f64 = 50.0;
/// Baseline increment per zone index
pub const BASELINE_STEP: f64 = 20.0;

/// A named grid partition with its baseline power level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zone {
    pub name: &'static str,
    pub baseline_power: f64,
}

static ZONES: [Zone; ZoneGrid::COUNT] = [
    Zone { name: "Zone_A", baseline_power: 50.0 },
    Zone { name: "Zone_B", baseline_power: 70.0 },
    Zone { name: "Zone_C", baseline_power: 90.0 },
    Zone { name: "Zone_D", baseline_power: 110.0 },
    Zone { name: "Zone_E", baseline_power: 130.0 },
    Zone { name: "Zone_F", baseline_power: 150.0 },
];

/// Ordered, immutable set of the six grid zones
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneGrid;

impl ZoneGrid {
    pub const COUNT: usize = 6;

    pub fn zones(&self) -> &'static [Zone] {
        &ZONES
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        ZONES.iter().map(|z| z.name)
    }

    /// Baseline power for any zone index, including indices past the table
    pub fn baseline(&self, zone_index: usize) -> f64 {
        BASELINE_OFFSET + BASELINE_STEP * zone_index as f64
    }

    /// `Zone_A`, `Zone_B`, ... continuing alphabetically past the fixed table
    pub fn label(&self, zone_index: usize) -> String {
        match ZONES.get(zone_index) {
            Some(zone) => zone.name.to_string(),
            None if zone_index < 26 => format!("Zone_{}", (b'A' + zone_index as u8) as char),
            None => format!("Zone_{}", zone_index),
        }
    }
}
