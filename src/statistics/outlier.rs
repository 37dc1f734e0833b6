//! Outlier detection over numeric populations.
//!
//! All three methods are pure and order-preserving: the flag vector is
//! positionally aligned with the input, and the same input always produces
//! the same flags.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_IQR_THRESHOLD, DEFAULT_MODIFIED_ZSCORE_THRESHOLD, DEFAULT_ZSCORE_THRESHOLD,
    MAD_CONSISTENCY,
};
use crate::error::Result;
use crate::statistics::quantile::quantile_sorted;

/// Outlier detection method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlierMethod {
    /// Interquartile-range fences: flag values outside
    /// `[Q1 - t*IQR, Q3 + t*IQR]`.
    Iqr,
    /// Z-score against the population mean and standard deviation.
    ZScore,
    /// Modified Z-score built on the median absolute deviation, robust to
    /// the outliers it is hunting.
    ModifiedZScore,
}

impl OutlierMethod {
    /// The conventional threshold for this method (1.5 for IQR, 3 for
    /// Z-score, 3.5 for modified Z-score).
    pub fn default_threshold(self) -> f64 {
        match self {
            OutlierMethod::Iqr => DEFAULT_IQR_THRESHOLD,
            OutlierMethod::ZScore => DEFAULT_ZSCORE_THRESHOLD,
            OutlierMethod::ModifiedZScore => DEFAULT_MODIFIED_ZSCORE_THRESHOLD,
        }
    }
}

/// Per-observation outlier flags plus the bounds that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Method used.
    pub method: OutlierMethod,
    /// Effective threshold.
    pub threshold: f64,
    /// Values strictly below this bound are flagged.
    pub lower_bound: f64,
    /// Values strictly above this bound are flagged.
    pub upper_bound: f64,
    /// One flag per input observation, in input order.
    pub flags: Vec<bool>,
    /// Number of flagged observations.
    pub n_outliers: usize,
}

impl OutlierReport {
    /// Indices of flagged observations, ascending.
    pub fn outlier_indices(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
            .collect()
    }
}

/// Detect outliers in a population.
///
/// `threshold` of `None` selects the method's conventional default. A
/// degenerate population (zero spread, zero MAD) flags nothing.
///
/// # Errors
///
/// `EmptyInput` for a zero-length population, `InvalidParameter` for
/// non-finite values or a non-positive threshold.
pub fn detect_outliers(
    values: &[f64],
    method: OutlierMethod,
    threshold: Option<f64>,
) -> Result<OutlierReport> {
    crate::validate::ensure_non_empty("population", values)?;
    crate::validate::ensure_finite_values("population", values)?;
    let threshold = threshold.unwrap_or_else(|| method.default_threshold());
    crate::validate::ensure_positive("threshold", threshold)?;

    let (lower_bound, upper_bound) = match method {
        OutlierMethod::Iqr => iqr_bounds(values, threshold),
        OutlierMethod::ZScore => zscore_bounds(values, threshold),
        OutlierMethod::ModifiedZScore => modified_zscore_bounds(values, threshold),
    };

    let flags: Vec<bool> = values
        .iter()
        .map(|&v| v < lower_bound || v > upper_bound)
        .collect();
    let n_outliers = flags.iter().filter(|&&f| f).count();

    Ok(OutlierReport {
        method,
        threshold,
        lower_bound,
        upper_bound,
        flags,
        n_outliers,
    })
}

fn iqr_bounds(values: &[f64], threshold: f64) -> (f64, f64) {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    (q1 - threshold * iqr, q3 + threshold * iqr)
}

fn zscore_bounds(values: &[f64], threshold: f64) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    // Population standard deviation, matching the classic z-score definition
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
    let sd = variance.sqrt();
    (mean - threshold * sd, mean + threshold * sd)
}

fn modified_zscore_bounds(values: &[f64], threshold: f64) -> (f64, f64) {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let median = quantile_sorted(&sorted, 0.5);

    let mut deviations: Vec<f64> = values.iter().map(|&v| (v - median).abs()).collect();
    deviations.sort_by(|a, b| a.total_cmp(b));
    let mad = quantile_sorted(&deviations, 0.5);

    // MAD of 0 collapses both bounds onto the median: nothing is flagged
    let spread = threshold * mad / MAD_CONSISTENCY;
    (median - spread, median + spread)
}
