//! Numeric helpers shared by the generators.
//!
//! Power and energy values are published with 2 decimals, ratios with 3.

/// Round `value` to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Power/energy precision.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Ratio/efficiency precision.
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

/// Clamp a ratio into `[0, 1]` and round it to ratio precision.
pub fn unit_ratio(value: f64) -> f64 {
    round3(value.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_precision() {
        assert_eq!(round2(12.345_6), 12.35);
        assert_eq!(round3(0.123_45), 0.123);
        assert_eq!(round4(0.012_345), 0.0123);
        assert_eq!(round2(-3.004), -3.0);
    }

    #[test]
    fn test_unit_ratio_clamps() {
        assert_eq!(unit_ratio(1.2), 1.0);
        assert_eq!(unit_ratio(-0.4), 0.0);
        assert_eq!(unit_ratio(0.812_6), 0.813);
    }
}
