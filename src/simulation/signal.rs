//! # Diurnal Signal Model
//!
//! A single bounded sample is `base * shape(t) + N(0, sigma)`, floored at zero
//! and rounded to power precision.
//!
//! The shape is a sinusoid phase-shifted so its minimum sits at `t = 0`:
//!
//! ```text
//! shape(t) = sin(2π · t / period − π/2) · 0.3 + 1      ∈ [0.7, 1.3]
//! ```
//!
//! Series generation always normalises against [`DAY_STEPS`], so horizons
//! longer than a day repeat the same daily pattern.

use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::utils::round2;

/// Reference period (one day of hourly steps) for the diurnal shape
pub const DAY_STEPS: usize = 24;

/// Peak deviation of the diurnal multiplier from 1.0
pub const DIURNAL_AMPLITUDE: f64 = 0.3;

/// Diurnal multiplier for `step` within a cycle of `period` steps
pub fn diurnal_shape(step: usize, period: usize) -> f64 {
    let phase = step as f64 / period.max(1) as f64;
    (2.0 * PI * phase - FRAC_PI_2).sin() * DIURNAL_AMPLITUDE + 1.0
}

/// Zero-mean Gaussian noise with the given standard deviation.
///
/// Negative or NaN deviations yield no noise.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, std_dev: f64) -> f64 {
    let sigma = std_dev.max(0.0);
    if sigma == 0.0 {
        return 0.0;
    }
    let z: f64 = rng.sample(StandardNormal);
    z * sigma
}

/// Combines the diurnal shape with independent Gaussian noise
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalModel;

impl SignalModel {
    /// Sample for `step` of a `period`-step cycle around `base`
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        step: usize,
        period: usize,
        base: f64,
        std_dev: f64,
    ) -> f64 {
        let value = base * diurnal_shape(step, period) + gaussian(rng, std_dev);
        round2(value.max(0.0))
    }

    /// Flat `base + noise` sample without the diurnal component
    pub fn noisy<R: Rng + ?Sized>(&self, rng: &mut R, base: f64, std_dev: f64) -> f64 {
        round2((base + gaussian(rng, std_dev)).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_shape_extremes() {
        // Trough at midnight, crest at midday
        assert!((diurnal_shape(0, DAY_STEPS) - 0.7).abs() < 1e-9);
        assert!((diurnal_shape(12, DAY_STEPS) - 1.3).abs() < 1e-9);
        assert!((diurnal_shape(6, DAY_STEPS) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_shape_repeats_each_day() {
        for step in 0..DAY_STEPS {
            let a = diurnal_shape(step, DAY_STEPS);
            let b = diurnal_shape(step + DAY_STEPS, DAY_STEPS);
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_variance_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(1);
        let model = SignalModel;
        assert_eq!(model.sample(&mut rng, 0, DAY_STEPS, 100.0, 0.0), 70.0);
        assert_eq!(model.sample(&mut rng, 12, DAY_STEPS, 100.0, 0.0), 130.0);
        assert_eq!(model.noisy(&mut rng, 42.0, 0.0), 42.0);
    }

    #[test]
    fn test_seeded_samples_reproduce() {
        let model = SignalModel;
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for step in 0..48 {
            assert_eq!(
                model.sample(&mut a, step, DAY_STEPS, 400.0, 50.0),
                model.sample(&mut b, step, DAY_STEPS, 400.0, 50.0)
            );
        }
    }

    #[test]
    fn test_negative_deviation_means_no_noise() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(gaussian(&mut rng, -5.0), 0.0);
        assert_eq!(gaussian(&mut rng, f64::NAN), 0.0);
    }

    #[test]
    fn test_noise_is_roughly_centered() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = 5_000;
        let sum: f64 = (0..n).map(|_| gaussian(&mut rng, 10.0)).sum();
        assert!((sum / n as f64).abs() < 1.0);
    }

    proptest! {
        #[test]
        fn prop_samples_are_non_negative(
            seed in any::<u64>(),
            step in 0usize..1000,
            base in 0.0f64..1000.0,
            std_dev in 0.0f64..500.0,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let value = SignalModel.sample(&mut rng, step, DAY_STEPS, base, std_dev);
            prop_assert!(value >= 0.0);
            prop_assert_eq!(value, round2(value));
        }
    }
}
