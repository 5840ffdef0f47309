//! Simple linear regression with inference.
//!
//! Fits `y = intercept + slope * x` by ordinary least squares and tests the
//! null hypothesis `slope = 0` with a two-sided t test on `n - 2` degrees
//! of freedom. The closed-form sums are hand-written because the inference
//! quantities (standard error, p-value) are not exposed by the model-fitting
//! crates; the Student-t CDF itself comes from `statrs`.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{AgritrendError, Result};

/// Minimum number of points for which a fit is defined.
pub const MIN_POINTS: usize = 2;

/// Ordinary least-squares fit of a line through `(x, y)` points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineFit {
    /// Change in `y` per unit of `x`.
    pub slope: f64,
    /// Fitted value at `x = 0`.
    pub intercept: f64,
    /// Squared Pearson correlation; 0.0 when `y` has no variance.
    pub r_squared: f64,
    /// Two-sided p-value for the null hypothesis `slope = 0`.
    ///
    /// Degenerate cases are pinned explicitly rather than left to float
    /// division: a perfect nonzero-slope fit yields 0.0, a constant `y`
    /// yields 1.0, and exactly two points (zero degrees of freedom) yield
    /// 1.0 because two points always fit a line exactly.
    pub p_value: f64,
    /// Standard error of the slope estimate; 0.0 in the degenerate cases.
    pub std_err: f64,
    /// Number of points the fit used.
    pub n: usize,
}

/// Fits a line through the given points.
///
/// # Errors
///
/// Returns a `DataProcessing` error when the slices differ in length, hold
/// fewer than [`MIN_POINTS`] points, or the x values have no variance.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Result<LineFit> {
    if xs.len() != ys.len() {
        return Err(AgritrendError::DataProcessing(format!(
            "regression inputs differ in length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    let n = xs.len();
    if n < MIN_POINTS {
        return Err(AgritrendError::DataProcessing(format!(
            "regression needs at least {MIN_POINTS} points, got {n}"
        )));
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 {
        return Err(AgritrendError::DataProcessing(
            "regression x values have no variance".to_owned(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    let r_squared = if syy > 0.0 { (sxy * sxy) / (sxx * syy) } else { 0.0 };

    // Residual sum of squares; clamp tiny negative float residue.
    let ss_res = (syy - slope * sxy).max(0.0);
    let dof = n.saturating_sub(2);

    let (std_err, p_value) = if dof == 0 {
        (0.0, 1.0)
    } else {
        let std_err = (ss_res / dof as f64 / sxx).sqrt();
        if std_err == 0.0 {
            // Perfect fit: a zero slope carries no evidence of a trend,
            // a nonzero slope is unambiguous.
            let p = if slope == 0.0 { 1.0 } else { 0.0 };
            (0.0, p)
        } else {
            let t = (slope / std_err).abs();
            let dist = StudentsT::new(0.0, 1.0, dof as f64).map_err(|e| {
                AgritrendError::DataProcessing(format!("t-distribution setup failed: {e}"))
            })?;
            let p = (2.0 * (1.0 - dist.cdf(t))).min(1.0);
            (std_err, p)
        }
    };

    Ok(LineFit {
        slope,
        intercept,
        r_squared,
        p_value,
        std_err,
        n,
    })
}
