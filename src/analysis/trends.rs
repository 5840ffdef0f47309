//! Cross-year trend detection.
//!
//! The engine reads a [`DatasetCollection`] and, for every column that is
//! numeric in every year, regresses the per-year mean against the year
//! index. It holds no other state than its [`TrendConfig`], performs no
//! I/O, and both operations are pure functions of their input: calling
//! them twice on the same collection yields identical results.

use std::collections::BTreeMap;

use polars::prelude::*;

use crate::collection::DatasetCollection;
use crate::error::{AgritrendError, Result};

use super::interpretation::describe_trend;
use super::regression::{self, fit_line};
use super::types::{ColumnTrend, TrendConfig, TrendDirection, TrendSeries};

/// Detects and characterizes linear trends in per-column yearly averages.
pub struct TrendEngine {
    config: TrendConfig,
}

impl TrendEngine {
    pub fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// Computes significant linear trends for every common numeric column.
    ///
    /// Years are sorted ascending and mapped to the indices `0..n-1`, which
    /// serve as the regression's independent variable; slope therefore
    /// reads as "change per year-step". A column is present in the result
    /// only when its two-sided p-value beats the configured significance
    /// level. Columns with fewer than two defined yearly means are skipped
    /// with a log notice; the skip never fails the operation.
    ///
    /// # Errors
    ///
    /// Returns [`AgritrendError::EmptyCollection`] when no years were
    /// supplied. Per-column conditions are absorbed, not propagated.
    pub fn compute_trends(
        &self,
        collection: &DatasetCollection,
    ) -> Result<BTreeMap<String, ColumnTrend>> {
        if collection.is_empty() {
            return Err(AgritrendError::EmptyCollection);
        }

        let columns = collection.common_numeric_columns();
        tracing::debug!(
            years = collection.len(),
            columns = columns.len(),
            "computing cross-year trends"
        );

        let mut trends = BTreeMap::new();
        for column in columns {
            let values = yearly_means(collection, &column)?;
            let (xs, ys): (Vec<f64>, Vec<f64>) = values
                .iter()
                .enumerate()
                .filter_map(|(index, value)| value.map(|y| (index as f64, y)))
                .unzip();

            if xs.len() < regression::MIN_POINTS {
                tracing::warn!(
                    column = %column,
                    defined_years = xs.len(),
                    "skipping column with fewer than two defined yearly means"
                );
                continue;
            }

            let fit = fit_line(&xs, &ys)?;
            if fit.p_value >= self.config.significance_level {
                continue;
            }

            trends.insert(
                column,
                ColumnTrend {
                    direction: TrendDirection::from_slope(fit.slope),
                    slope: fit.slope,
                    intercept: fit.intercept,
                    r_squared: fit.r_squared,
                    p_value: fit.p_value,
                    description: describe_trend(fit.slope, fit.r_squared, &self.config),
                },
            );
        }
        Ok(trends)
    }

    /// Computes the raw year/value series for every common numeric column.
    ///
    /// Same per-column averaging as [`Self::compute_trends`], but with no
    /// regression and no significance filter: every common column appears
    /// in the result, and gaps are preserved positionally as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AgritrendError::EmptyCollection`] when no years were supplied.
    pub fn compute_series(
        &self,
        collection: &DatasetCollection,
    ) -> Result<BTreeMap<String, TrendSeries>> {
        if collection.is_empty() {
            return Err(AgritrendError::EmptyCollection);
        }

        let years = collection.years();
        let mut series = BTreeMap::new();
        for column in collection.common_numeric_columns() {
            let values = yearly_means(collection, &column)?;
            series.insert(
                column,
                TrendSeries {
                    years: years.clone(),
                    values,
                },
            );
        }
        Ok(series)
    }
}

impl Default for TrendEngine {
    fn default() -> Self {
        Self::new(TrendConfig::default())
    }
}

/// Mean of the non-missing values of `column` for each year, in ascending
/// year order. A year with no non-missing values yields `None`.
fn yearly_means(collection: &DatasetCollection, column: &str) -> Result<Vec<Option<f64>>> {
    let mut means = Vec::with_capacity(collection.len());
    for (_, df) in collection.iter() {
        let series = df.column(column)?.as_materialized_series();
        let ca = series.cast(&DataType::Float64)?;
        means.push(ca.f64()?.mean());
    }
    Ok(means)
}
