//! Yearly dataset collection.
//!
//! A [`DatasetCollection`] maps years to already-materialized Polars
//! `DataFrame`s, one per year. The collection is the sole input of the
//! analytics engine: it performs no I/O and never mutates the frames it
//! holds. How the frames were produced (locale-specific decimal handling,
//! separator quirks, remote fetching) is the loader's concern, not ours.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::*;

use crate::error::{AgritrendError, Result};

/// Orderable year key. Years form the time axis of every trend computation.
pub type Year = i32;

/// An ordered mapping from year to dataset.
///
/// Iteration order is always ascending by year; duplicate years are
/// rejected at insertion.
#[derive(Debug, Clone, Default)]
pub struct DatasetCollection {
    datasets: BTreeMap<Year, DataFrame>,
}

impl DatasetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from `(year, dataset)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AgritrendError::DuplicateYear`] if the same year appears twice.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Year, DataFrame)>,
    {
        let mut collection = Self::new();
        for (year, dataset) in pairs {
            collection.insert(year, dataset)?;
        }
        Ok(collection)
    }

    /// Adds one year's dataset.
    ///
    /// # Errors
    ///
    /// Returns [`AgritrendError::DuplicateYear`] if the year is already present.
    pub fn insert(&mut self, year: Year, dataset: DataFrame) -> Result<()> {
        if self.datasets.contains_key(&year) {
            return Err(AgritrendError::DuplicateYear(year));
        }
        self.datasets.insert(year, dataset);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// All years in ascending order.
    pub fn years(&self) -> Vec<Year> {
        self.datasets.keys().copied().collect()
    }

    pub fn get(&self, year: Year) -> Option<&DataFrame> {
        self.datasets.get(&year)
    }

    /// Iterates `(year, dataset)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (Year, &DataFrame)> {
        self.datasets.iter().map(|(year, df)| (*year, df))
    }

    /// The schema-intersection step: names of columns that exist with a
    /// numeric dtype in every year's dataset, sorted for determinism.
    ///
    /// Columns that are missing from any single year, or non-numeric in any
    /// single year, are excluded here before any statistics are attempted.
    /// The set is recomputed on each call; nothing is cached.
    pub fn common_numeric_columns(&self) -> Vec<String> {
        let mut years = self.datasets.values();
        let Some(first) = years.next() else {
            return Vec::new();
        };

        let mut common = numeric_column_names(first);
        for df in years {
            let names = numeric_column_names(df);
            common.retain(|name| names.contains(name));
        }
        common.into_iter().collect()
    }
}

fn numeric_column_names(df: &DataFrame) -> BTreeSet<String> {
    df.get_columns()
        .iter()
        .filter(|col| col.dtype().is_numeric())
        .map(|col| col.name().to_string())
        .collect()
}
