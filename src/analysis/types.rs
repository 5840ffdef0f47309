use serde::{Deserialize, Serialize};

use crate::collection::Year;
use crate::error::Result;

use super::interpretation::{
    FAST_SLOPE, MODERATE_R2, MODERATE_SLOPE, SIGNIFICANCE_LEVEL, STRONG_R2,
};

/// Direction of a fitted linear trend.
///
/// An exactly-zero slope is classified as `Flat` rather than forced into
/// one of the signed buckets; a flat fit never passes the significance gate
/// anyway, so `Flat` only surfaces when inspecting raw fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Flat,
}

impl TrendDirection {
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            Self::Increasing
        } else if slope < 0.0 {
            Self::Decreasing
        } else {
            Self::Flat
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Flat => "flat",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A statistically significant linear trend for one column.
///
/// `slope` is change per year-step (the regression runs over the year
/// index `0..n-1`, not the literal year value), so it stays interpretable
/// even when the year keys are not consecutive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnTrend {
    pub direction: TrendDirection,
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub p_value: f64,
    /// Qualitative strength/speed phrase, e.g. "strong and fast trend".
    pub description: String,
}

/// Raw per-year averages for one column, without any significance filter.
///
/// `values` is aligned positionally with `years`; a year whose column has
/// no non-missing values contributes `None`, never zero. Consumers decide
/// whether to skip or interpolate gaps; the engine never interpolates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub years: Vec<Year>,
    pub values: Vec<Option<f64>>,
}

/// Thresholds steering trend detection and description.
///
/// All values that were literals in earlier designs live here so tests and
/// domain retuning can adjust them without code changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Two-sided significance level for the slope test (default 0.05).
    pub significance_level: f64,
    /// r-squared above which a trend is described as "strong".
    pub strong_r2: f64,
    /// r-squared above which a trend is described as "moderate".
    pub moderate_r2: f64,
    /// Absolute slope above which a trend is described as "fast".
    pub fast_slope: f64,
    /// Absolute slope above which a trend is described as "moderate".
    pub moderate_slope: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            significance_level: SIGNIFICANCE_LEVEL,
            strong_r2: STRONG_R2,
            moderate_r2: MODERATE_R2,
            fast_slope: FAST_SLOPE,
            moderate_slope: MODERATE_SLOPE,
        }
    }
}

impl TrendConfig {
    /// Loads a config from a pretty-printed JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Writes the config as pretty-printed JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories or file cannot be written.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Descriptive statistics for one numeric column of a single year's dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub count: usize,
    pub nulls: usize,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub mean: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
    pub std_dev: Option<f64>,
}

/// Pairwise Pearson correlations over the numeric columns of a dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub data: Vec<Vec<f64>>,
}
