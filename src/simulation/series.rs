//! # Series Generation
//!
//! Drives [`SignalModel`] across a horizon of hourly steps. The series always
//! ends one step before `now` and extends backwards in ascending order.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::signal::{SignalModel, DAY_STEPS};
use crate::domain::{Metric, SamplePoint, Series};

/// Generator configuration for one metric
#[derive(Debug, Clone, Copy)]
pub struct SeriesGenerator {
    pub metric: Metric,
    /// Level the diurnal shape oscillates around
    pub base: f64,
    /// Standard deviation of the additive noise
    pub variance: f64,
    /// Steps per diurnal cycle
    pub period: usize,
}

impl SeriesGenerator {
    pub fn new(metric: Metric, base: f64, variance: f64) -> Self {
        Self {
            metric,
            base,
            variance,
            period: DAY_STEPS,
        }
    }

    /// Generate `horizon` hourly points ending at the current time
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, horizon: usize) -> Series {
        self.generate_at(rng, horizon, Utc::now())
    }

    /// Generate `horizon` hourly points ending at `now`
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        horizon: usize,
        now: DateTime<Utc>,
    ) -> Series {
        let model = SignalModel;
        let points = hourly_timestamps(now, horizon)
            .into_iter()
            .enumerate()
            .map(|(step, timestamp)| SamplePoint {
                timestamp,
                value: model.sample(rng, step, self.period, self.base, self.variance),
            })
            .collect();

        Series {
            metric: self.metric,
            points,
        }
    }
}

/// `horizon` ascending instants `now - (horizon - i)` hours
pub fn hourly_timestamps(now: DateTime<Utc>, horizon: usize) -> Vec<DateTime<Utc>> {
    (0..horizon)
        .map(|i| now - Duration::hours((horizon - i) as i64))
        .collect()
}
