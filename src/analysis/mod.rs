//! Analytics over yearly tabular datasets: trend detection, descriptive
//! profiling, and correlation.

pub mod correlation;
pub mod interpretation;
pub mod profiling;
pub mod regression;
pub mod trends;
pub mod types;

pub use correlation::correlation_matrix;
pub use profiling::profile_dataset;
pub use regression::{LineFit, fit_line};
pub use trends::TrendEngine;
pub use types::{
    ColumnProfile, ColumnTrend, CorrelationMatrix, TrendConfig, TrendDirection, TrendSeries,
};

#[cfg(test)]
mod tests;
