//! Pairwise Pearson correlation over numeric columns.

use polars::prelude::*;

use crate::error::Result;

use super::types::CorrelationMatrix;

/// Computes the Pearson correlation matrix over the numeric columns of `df`.
///
/// Returns `None` when fewer than two numeric columns exist. The diagonal
/// is exactly 1.0; a pair with undefined correlation (e.g. a constant
/// column) contributes 0.0.
///
/// # Errors
///
/// Returns a `DataProcessing` error if a numeric column cannot be cast to
/// `f64`.
pub fn correlation_matrix(df: &DataFrame) -> Result<Option<CorrelationMatrix>> {
    let numeric_cols: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|col| col.dtype().is_numeric())
        .map(|col| col.name().to_string())
        .collect();

    if numeric_cols.len() < 2 {
        return Ok(None);
    }

    // Cast each column once up front.
    let mut casted = Vec::with_capacity(numeric_cols.len());
    for name in &numeric_cols {
        let series = df.column(name)?.as_materialized_series();
        casted.push(series.cast(&DataType::Float64)?);
    }

    let mut matrix = Vec::with_capacity(numeric_cols.len());
    for i in 0..numeric_cols.len() {
        let mut row = Vec::with_capacity(numeric_cols.len());
        for j in 0..numeric_cols.len() {
            if i == j {
                row.push(1.0);
            } else {
                let corr = polars::prelude::cov::pearson_corr(casted[i].f64()?, casted[j].f64()?, 1);
                row.push(corr.unwrap_or(0.0));
            }
        }
        matrix.push(row);
    }

    Ok(Some(CorrelationMatrix {
        columns: numeric_cols,
        data: matrix,
    }))
}
