//! # Agritrend - Cross-Year Trend Analytics
//!
//! Agritrend is a Rust library for analyzing yearly tabular datasets: it
//! detects statistically significant linear trends in per-column yearly
//! averages, profiles individual datasets, and computes correlation
//! matrices. It consumes already-materialized Polars `DataFrame`s and
//! performs no I/O and no network access of its own; fetching and parsing
//! the raw data is the loader's job, rendering the results is the chart
//! layer's job.
//!
//! ## Quick Start
//!
//! ```
//! use agritrend::analysis::TrendEngine;
//! use agritrend::collection::DatasetCollection;
//! use polars::prelude::*;
//!
//! # fn main() -> agritrend::error::Result<()> {
//! let mut collection = DatasetCollection::new();
//! collection.insert(2018, df!("milk" => [10.0, 12.0])?)?;
//! collection.insert(2019, df!("milk" => [14.0, 16.0])?)?;
//! collection.insert(2020, df!("milk" => [18.0, 20.0])?)?;
//!
//! let engine = TrendEngine::default();
//! let trends = engine.compute_trends(&collection)?;
//! if let Some(trend) = trends.get("milk") {
//!     println!("milk: {} ({})", trend.direction, trend.description);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`collection`]: the `{year → dataset}` input mapping and its
//!   schema-intersection step
//! - [`analysis`]: trend detection, OLS regression with inference,
//!   descriptive profiling, correlation
//! - [`labels`]: code → label metadata extracted from dataset README text
//! - [`error`]: error types and handling utilities
//! - [`logging`]: tracing setup for embedding applications
//!
//! ## Key Concepts
//!
//! ### Trend detection
//!
//! For every column that is numeric in *every* year, the engine averages
//! the non-missing values per year and fits an ordinary least-squares line
//! over the year index. Only columns whose slope is significant at the
//! configured level are reported:
//!
//! ```no_run
//! use agritrend::analysis::{TrendConfig, TrendEngine};
//!
//! let config = TrendConfig {
//!     significance_level: 0.01, // stricter than the 0.05 default
//!     ..TrendConfig::default()
//! };
//! let engine = TrendEngine::new(config);
//! ```
//!
//! ### Gaps are gaps
//!
//! A year in which a column has no non-missing values contributes a gap,
//! never a zero. [`analysis::TrendEngine::compute_series`] preserves gaps
//! positionally so a plotting layer can decide what to do with them; the
//! trend fit simply excludes them.

#![warn(clippy::all, rust_2018_idioms)]

pub mod analysis;
pub mod collection;
pub mod error;
pub mod labels;
pub mod logging;
pub mod utils;
