//! Summary statistics for audit populations.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::statistics::quantile::quantile_sorted;
use crate::table::DataTable;

/// Descriptive report over a numeric population.
///
/// Undefined moments are reported as `NaN` rather than raised as errors:
/// this is a descriptive report, not a precondition check. The standard
/// deviation is the sample estimate (one delta degree of freedom).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of observations.
    pub count: usize,
    /// Sum of all observations (the "foot" of the population).
    pub sum: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation; `NaN` for fewer than two values.
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// First quartile (R-7 interpolation).
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile (R-7 interpolation).
    pub q3: f64,
    /// Adjusted Fisher-Pearson skewness (G1); `NaN` for fewer than three
    /// values or zero spread.
    pub skewness: f64,
    /// Excess kurtosis (G2); `NaN` for fewer than four values or zero spread.
    pub kurtosis: f64,
}

/// Population central moments, shared with the normality tests.
pub(crate) struct Moments {
    pub n: usize,
    pub mean: f64,
    /// Second central moment (population variance).
    pub m2: f64,
    pub m3: f64,
    pub m4: f64,
}

pub(crate) fn central_moments(values: &[f64]) -> Moments {
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
    for &v in values {
        let d = v - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    let nf = n as f64;
    Moments {
        n,
        mean,
        m2: m2 / nf,
        m3: m3 / nf,
        m4: m4 / nf,
    }
}

/// Compute a descriptive summary over a numeric population.
///
/// # Errors
///
/// `EmptyInput` for a zero-length population, `InvalidParameter` for
/// non-finite values. A single-element population is fine; its undefined
/// moments come back as `NaN`.
pub fn compute_summary_stats(values: &[f64]) -> Result<SummaryStats> {
    crate::validate::ensure_non_empty("population", values)?;
    crate::validate::ensure_finite_values("population", values)?;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let moments = central_moments(values);
    let n = moments.n;
    let nf = n as f64;

    let std_dev = if n >= 2 {
        (moments.m2 * nf / (nf - 1.0)).sqrt()
    } else {
        f64::NAN
    };

    let (skewness, kurtosis) = shape_moments(&moments);

    Ok(SummaryStats {
        count: n,
        sum: values.iter().sum(),
        mean: moments.mean,
        std_dev,
        min: sorted[0],
        max: sorted[n - 1],
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
        skewness,
        kurtosis,
    })
}

/// Summarize a table column, excluding missing cells.
///
/// # Errors
///
/// `ColumnNotFound` for an unknown column, `EmptyInput` when the column has
/// no non-missing values.
pub fn summarize_column(table: &DataTable, column: &str) -> Result<SummaryStats> {
    let values = table.column_values(column)?;
    compute_summary_stats(&values)
}

fn shape_moments(moments: &Moments) -> (f64, f64) {
    let nf = moments.n as f64;
    if moments.m2 <= 0.0 {
        return (f64::NAN, f64::NAN);
    }

    let skewness = if moments.n >= 3 {
        let g1 = moments.m3 / moments.m2.powf(1.5);
        (nf * (nf - 1.0)).sqrt() / (nf - 2.0) * g1
    } else {
        f64::NAN
    };

    let kurtosis = if moments.n >= 4 {
        let g2 = moments.m4 / (moments.m2 * moments.m2) - 3.0;
        ((nf + 1.0) * g2 + 6.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0))
    } else {
        f64::NAN
    };

    (skewness, kurtosis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_population() {
        let stats = compute_summary_stats(&[100.0, 200.0, 300.0, 400.0, 500.0]).unwrap();
        assert_eq!(stats.count, 5);
        assert!((stats.sum - 1500.0).abs() < 1e-10);
        assert!((stats.mean - 300.0).abs() < 1e-10);
        assert!((stats.std_dev - 25_000.0_f64.sqrt()).abs() < 1e-9);
        assert!((stats.q1 - 200.0).abs() < 1e-10);
        assert!((stats.median - 300.0).abs() < 1e-10);
        assert!((stats.q3 - 400.0).abs() < 1e-10);
        assert!(stats.skewness.abs() < 1e-10);
        // Matches the bias-corrected excess kurtosis of a symmetric 5-point grid
        assert!((stats.kurtosis - (-1.2)).abs() < 1e-9);
    }

    #[test]
    fn single_element_is_defined() {
        let stats = compute_summary_stats(&[42.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert!((stats.mean - 42.0).abs() < 1e-12);
        assert!((stats.min - 42.0).abs() < 1e-12);
        assert!((stats.median - 42.0).abs() < 1e-12);
        assert!(stats.std_dev.is_nan());
        assert!(stats.skewness.is_nan());
        assert!(stats.kurtosis.is_nan());
    }

    #[test]
    fn constant_population_has_undefined_shape() {
        let stats = compute_summary_stats(&[7.0; 10]).unwrap();
        assert!((stats.std_dev - 0.0).abs() < 1e-12);
        assert!(stats.skewness.is_nan());
        assert!(stats.kurtosis.is_nan());
    }

    #[test]
    fn column_summary_skips_missing_cells() {
        let table = DataTable::new()
            .with_nullable_column("amount", vec![Some(1.0), None, Some(3.0)])
            .unwrap();
        let stats = summarize_column(&table, "amount").unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.mean - 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_population_errors() {
        assert!(compute_summary_stats(&[]).is_err());
    }
}
