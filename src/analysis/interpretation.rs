//! Qualitative description of fitted trends.

use super::types::TrendConfig;

pub const SIGNIFICANCE_LEVEL: f64 = 0.05;
pub const STRONG_R2: f64 = 0.7;
pub const MODERATE_R2: f64 = 0.5;
pub const FAST_SLOPE: f64 = 1.0;
pub const MODERATE_SLOPE: f64 = 0.5;

/// Combines an r-squared strength label with an absolute-slope speed label,
/// e.g. "strong and fast trend". Both scales are independent; the
/// thresholds come from the supplied config.
pub fn describe_trend(slope: f64, r_squared: f64, config: &TrendConfig) -> String {
    let strength = if r_squared > config.strong_r2 {
        "strong"
    } else if r_squared > config.moderate_r2 {
        "moderate"
    } else {
        "weak"
    };

    let speed = if slope.abs() > config.fast_slope {
        "fast"
    } else if slope.abs() > config.moderate_slope {
        "moderate"
    } else {
        "slow"
    };

    format!("{strength} and {speed} trend")
}
