//! Descriptive statistics for the numeric columns of a single year's dataset.

use polars::prelude::*;

use crate::error::Result;
use crate::utils::fmt_opt;

use super::types::ColumnProfile;

/// Profiles every numeric column of `df`.
///
/// Non-numeric columns are ignored; nulls are excluded from all
/// aggregations but reported in `nulls`.
///
/// # Errors
///
/// Returns a `DataProcessing` error if a numeric column cannot be cast to
/// `f64`.
pub fn profile_dataset(df: &DataFrame) -> Result<Vec<ColumnProfile>> {
    let row_count = df.height();
    let mut profiles = Vec::new();

    for col in df.get_columns() {
        if !col.dtype().is_numeric() {
            continue;
        }

        let series = col.as_materialized_series();
        let ca = series.cast(&DataType::Float64)?;
        let ca = ca.f64()?;

        profiles.push(ColumnProfile {
            name: col.name().to_string(),
            count: row_count,
            nulls: col.null_count(),
            min: ca.min(),
            q1: ca.quantile(0.25, QuantileMethod::Linear)?,
            median: ca.median(),
            mean: ca.mean(),
            q3: ca.quantile(0.75, QuantileMethod::Linear)?,
            max: ca.max(),
            std_dev: ca.std(1),
        });
    }

    Ok(profiles)
}

impl ColumnProfile {
    /// Renderer-friendly one-line summary, e.g. for tabular text output.
    pub fn summary_line(&self) -> String {
        format!(
            "{}: n={} nulls={} min={} median={} mean={} max={} std={}",
            self.name,
            self.count,
            self.nulls,
            fmt_opt(self.min),
            fmt_opt(self.median),
            fmt_opt(self.mean),
            fmt_opt(self.max),
            fmt_opt(self.std_dev),
        )
    }
}
