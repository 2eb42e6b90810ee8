//! Standard normal helpers shared by the personality and cognitive pipelines.

use std::f64::consts::SQRT_2;

// Abramowitz & Stegun 7.1.26 coefficients
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Lowest and highest percentile ever reported.
pub const PERCENTILE_FLOOR: u8 = 1;
pub const PERCENTILE_CEILING: u8 = 99;

/// Standard normal CDF, absolute error below 1.5e-7.
pub fn normal_cdf(z: f64) -> f64 {
    let sign = if z < 0.0 { -1.0 } else { 1.0 };
    let x = z.abs() / SQRT_2;

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    0.5 * (1.0 + sign * y)
}

/// `round(cdf(z) * 100)` clamped to 1..=99.
pub fn z_to_percentile(z: f64) -> u8 {
    if z.is_nan() {
        return 50;
    }
    let percentile = (normal_cdf(z) * 100.0).round();
    percentile.clamp(PERCENTILE_FLOOR as f64, PERCENTILE_CEILING as f64) as u8
}

/// Two-decimal rounding used for every reported raw and z value.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_matches_known_values() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((normal_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!((normal_cdf(-1.0) - 0.158655).abs() < 1e-5);
    }

    #[test]
    fn cdf_is_symmetric() {
        for i in 0..=40 {
            let z = i as f64 * 0.1;
            let sum = normal_cdf(z) + normal_cdf(-z);
            assert!((sum - 1.0).abs() < 1e-6, "asymmetric at z={z}");
        }
    }

    #[test]
    fn percentile_is_monotonic_and_bounded() {
        let mut previous = 0u8;
        for i in -600..=600 {
            let p = z_to_percentile(i as f64 / 100.0);
            assert!((1..=99).contains(&p));
            assert!(p >= previous, "percentile decreased at z={}", i as f64 / 100.0);
            previous = p;
        }
        assert_eq!(z_to_percentile(0.0), 50);
        assert_eq!(z_to_percentile(f64::INFINITY), 99);
        assert_eq!(z_to_percentile(f64::NEG_INFINITY), 1);
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(-1.23456), -1.23);
    }
}
