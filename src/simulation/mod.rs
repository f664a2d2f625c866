//! # Synthetic Grid Simulation
//!
//! Plausible-data generators for the dashboard. Nothing here models power
//! flow or conservation; every call is independent and takes its random
//! source from the caller.
//!
//! ## Components
//!
//! - **Signal**: diurnal sinusoid plus Gaussian noise, floored at zero
//! - **Series**: hourly series ending at "now"
//! - **Zones**: the fixed six-zone table and its baselines
//! - **Heatmap**: zone x time power/efficiency matrix
//! - **Spikes**: neuromorphic-style activity per sensor group
//!
//! ## Usage
//!
//! ```rust
//! use energy_morph::domain::Metric;
//! use energy_morph::simulation::{HeatmapBuilder, SeriesGenerator, ZoneGrid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let demand = SeriesGenerator::new(Metric::Demand, 420.0, 30.0).generate(&mut rng, 24);
//! assert_eq!(demand.len(), 24);
//!
//! let heatmap = HeatmapBuilder::default().build(&mut rng, ZoneGrid::COUNT, 24);
//! assert_eq!(heatmap.dimensions(), (6, 24));
//! ```

pub mod heatmap;
pub mod series;
pub mod signal;
pub mod spikes;
pub mod zones;

pub use heatmap::HeatmapBuilder;
pub use series::{hourly_timestamps, SeriesGenerator};
pub use signal::{diurnal_shape, gaussian, SignalModel, DAY_STEPS};
pub use spikes::{SpikePatternSynthesizer, SPIKE_GROUPS};
pub use zones::{Zone, ZoneGrid};
