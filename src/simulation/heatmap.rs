//! # Zone Heatmap
//!
//! Composes [`ZoneGrid`] baselines with the diurnal shape into a zone x time
//! matrix. Efficiency carries a `power / 500` term so higher-output zones read
//! as more efficient.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::series::hourly_timestamps;
use super::signal::{diurnal_shape, gaussian, DAY_STEPS};
use super::zones::ZoneGrid;
use crate::domain::HeatmapMatrix;
use crate::utils::{round2, unit_ratio};

/// Heatmap noise and efficiency coupling parameters
#[derive(Debug, Clone, Copy)]
pub struct HeatmapBuilder {
    pub power_std_dev: f64,
    pub efficiency_base: f64,
    pub efficiency_std_dev: f64,
    /// Power that adds a full 1.0 to efficiency
    pub efficiency_power_scale: f64,
}

impl Default for HeatmapBuilder {
    fn default() -> Self {
        Self {
            power_std_dev: 10.0,
            efficiency_base: 0.7,
            efficiency_std_dev: 0.1,
            efficiency_power_scale: 500.0,
        }
    }
}

impl HeatmapBuilder {
    pub fn build<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        zone_count: usize,
        horizon: usize,
    ) -> HeatmapMatrix {
        self.build_at(rng, zone_count, horizon, Utc::now())
    }

    pub fn build_at<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        zone_count: usize,
        horizon: usize,
        now: DateTime<Utc>,
    ) -> HeatmapMatrix {
        let grid = ZoneGrid;
        let mut power = Vec::with_capacity(zone_count);
        let mut efficiency = Vec::with_capacity(zone_count);

        for zone_idx in 0..zone_count {
            let base_power = grid.baseline(zone_idx);
            let mut zone_power = Vec::with_capacity(horizon);
            let mut zone_efficiency = Vec::with_capacity(horizon);

            for hour_idx in 0..horizon {
                let raw = base_power * diurnal_shape(hour_idx, DAY_STEPS)
                    + gaussian(rng, self.power_std_dev);
                let eff = self.efficiency_base
                    + gaussian(rng, self.efficiency_std_dev)
                    + raw / self.efficiency_power_scale;

                zone_power.push(round2(raw.max(0.0)));
                zone_efficiency.push(unit_ratio(eff));
            }

            power.push(zone_power);
            efficiency.push(zone_efficiency);
        }

        HeatmapMatrix {
            zones: (0..zone_count).map(|i| grid.label(i)).collect(),
            timestamps: hourly_timestamps(now, horizon),
            power,
            efficiency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mean;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
        let mx = mean(xs).unwrap();
        let my = mean(ys).unwrap();
        let cov: f64 = xs.iter().zip(ys).map(|(x, y)| (x - mx) * (y - my)).sum();
        let vx: f64 = xs.iter().map(|x| (x - mx).powi(2)).sum();
        let vy: f64 = ys.iter().map(|y| (y - my).powi(2)).sum();
        cov / (vx.sqrt() * vy.sqrt())
    }

    #[test]
    fn test_six_zone_day() {
        let mut rng = StdRng::seed_from_u64(42);
        let matrix = HeatmapBuilder::default().build(&mut rng, ZoneGrid::COUNT, 24);

        assert_eq!(matrix.dimensions(), (6, 24));
        assert_eq!(matrix.zones[0], "Zone_A");
        assert_eq!(matrix.zones[5], "Zone_F");
        assert!(matrix.power.iter().all(|row| row.len() == 24));
        assert!(matrix.efficiency.iter().all(|row| row.len() == 24));
    }

    #[test]
    fn test_empty_horizon_keeps_zone_rows() {
        let mut rng = StdRng::seed_from_u64(1);
        let matrix = HeatmapBuilder::default().build(&mut rng, 3, 0);
        assert_eq!(matrix.dimensions(), (3, 0));
        assert!(matrix.power.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_zone_power_and_efficiency_correlate() {
        let builder = HeatmapBuilder::default();
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let matrix = builder.build(&mut rng, ZoneGrid::COUNT, 168);

            let powers: Vec<f64> = (0..6).filter_map(|z| matrix.zone_mean_power(z)).collect();
            let effs: Vec<f64> = (0..6).filter_map(|z| matrix.zone_mean_efficiency(z)).collect();

            assert!(pearson(&powers, &effs) > 0.5, "seed {seed}");
            assert!(powers.windows(2).all(|w| w[0] < w[1]), "seed {seed}");
        }
    }

    proptest! {
        #[test]
        fn prop_cells_are_bounded(seed in any::<u64>(), zones in 0usize..10, horizon in 0usize..72) {
            let mut rng = StdRng::seed_from_u64(seed);
            let matrix = HeatmapBuilder::default().build(&mut rng, zones, horizon);

            prop_assert_eq!(matrix.dimensions(), (zones, horizon));
            prop_assert!(matrix.timestamps.windows(2).all(|w| w[0] < w[1]));
            for row in &matrix.power {
                prop_assert_eq!(row.len(), horizon);
                prop_assert!(row.iter().all(|v| *v >= 0.0));
            }
            for row in &matrix.efficiency {
                prop_assert!(row.iter().all(|v| (0.0..=1.0).contains(v)));
            }
        }
    }
}
