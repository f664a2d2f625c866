//! Neuromorphic-style spike patterns used as a decorative confidence signal.
//!
//! Independent of the series generators; spike counts carry no relation to the
//! predicted values.

use rand::Rng;

use crate::domain::SpikeGroup;

/// Logical sensor groups, in output order
pub const SPIKE_GROUPS: [&str; 5] = [
    "solar_input",
    "wind_input",
    "demand_sensor",
    "storage_control",
    "grid_balance",
];

/// Width of the normalized spike window
pub const SPIKE_WINDOW: f64 = 100.0;

#[derive(Debug, Clone, Copy)]
pub struct SpikePatternSynthesizer {
    pub min_spikes: usize,
    pub max_spikes: usize,
    /// Resting-potential style range in mV
    pub potential_range: (f64, f64),
}

impl Default for SpikePatternSynthesizer {
    fn default() -> Self {
        Self {
            min_spikes: 5,
            max_spikes: 15,
            potential_range: (-70.0, -50.0),
        }
    }
}

impl SpikePatternSynthesizer {
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<SpikeGroup> {
        SPIKE_GROUPS
            .iter()
            .map(|group| self.group(rng, group))
            .collect()
    }

    fn group<R: Rng + ?Sized>(&self, rng: &mut R, name: &str) -> SpikeGroup {
        let count = rng.gen_range(self.min_spikes..=self.max_spikes);
        let mut spike_times: Vec<f64> = (0..count)
            .map(|_| rng.gen_range(0.0..SPIKE_WINDOW))
            .collect();
        spike_times.sort_by(f64::total_cmp);

        let (low, high) = self.potential_range;
        SpikeGroup {
            group: name.to_string(),
            firing_rate: count as f64 / SPIKE_WINDOW,
            spike_times,
            membrane_potential: rng.gen_range(low..high),
        }
    }
}
