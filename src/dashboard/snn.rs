//! Spiking-network styled predictions and neuron activity.
//!
//! The "network" is cosmetic: predictions come straight from the series
//! generators and spike data from [`SpikePatternSynthesizer`].

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use uuid::Uuid;

use super::random_id;
use crate::domain::{Metric, SpikeGroup};
use crate::simulation::{gaussian, SeriesGenerator, SpikePatternSynthesizer};
use crate::utils::{round3, round4};

pub const PREDICTION_HORIZON: usize = 24;

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub predicted_demand: Vec<f64>,
    pub predicted_solar: Vec<f64>,
    pub predicted_wind: Vec<f64>,
    /// [0.85, 0.95]
    pub confidence: f64,
    pub spike_patterns: Vec<SpikeGroup>,
}

pub fn predictions<R: Rng + ?Sized>(rng: &mut R) -> Prediction {
    let demand = SeriesGenerator::new(Metric::Demand, 420.0, 30.0);
    let solar = SeriesGenerator::new(Metric::SolarOutput, 80.0, 20.0);
    let wind = SeriesGenerator::new(Metric::WindOutput, 60.0, 25.0);

    Prediction {
        id: random_id(rng),
        timestamp: Utc::now(),
        predicted_demand: demand.generate(rng, PREDICTION_HORIZON).values(),
        predicted_solar: solar.generate(rng, PREDICTION_HORIZON).values(),
        predicted_wind: wind.generate(rng, PREDICTION_HORIZON).values(),
        confidence: round3(0.85 + rng.gen_range(0.0..=0.1)),
        spike_patterns: SpikePatternSynthesizer::default().synthesize(rng),
    }
}

struct NeuronGroupSpec {
    name: &'static str,
    neurons: u32,
    active: RangeInclusive<u32>,
}

const NEURON_GROUPS: [NeuronGroupSpec; 5] = [
    NeuronGroupSpec { name: "solar_input", neurons: 100, active: 20..=50 },
    NeuronGroupSpec { name: "wind_input", neurons: 100, active: 30..=60 },
    NeuronGroupSpec { name: "demand_sensor", neurons: 150, active: 40..=80 },
    NeuronGroupSpec { name: "storage_control", neurons: 80, active: 15..=40 },
    NeuronGroupSpec { name: "grid_balance", neurons: 200, active: 60..=120 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NeuronCount {
    pub neurons: u32,
    pub active: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NeuronActivity {
    pub timestamp: DateTime<Utc>,
    pub neuron_groups: BTreeMap<&'static str, NeuronCount>,
    pub total_spikes: u32,
    pub network_state: &'static str,
    pub learning_rate: f64,
}

pub fn neuron_activity<R: Rng + ?Sized>(rng: &mut R) -> NeuronActivity {
    let neuron_groups: BTreeMap<_, _> = NEURON_GROUPS
        .iter()
        .map(|spec| {
            let count = NeuronCount {
                neurons: spec.neurons,
                active: rng.gen_range(spec.active.clone()),
            };
            (spec.name, count)
        })
        .collect();
    let total_spikes = neuron_groups.values().map(|g| g.active).sum();

    NeuronActivity {
        timestamp: Utc::now(),
        neuron_groups,
        total_spikes,
        network_state: "active",
        learning_rate: round4(0.01 + gaussian(rng, 0.002)),
    }
}
