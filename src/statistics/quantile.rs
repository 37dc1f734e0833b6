//! Quantile computation using the R-7 definition.

use crate::error::{AuditError, Result};

/// Compute the quantile at probability `p` over a numeric population.
///
/// Uses the R-7 definition (linear interpolation between order statistics),
/// the default of most statistical environments. The input is copied and
/// sorted once.
///
/// # Errors
///
/// `EmptyInput` for a zero-length population, `InvalidParameter` for `p`
/// outside [0, 1] or non-finite values.
pub fn quantile(data: &[f64], p: f64) -> Result<f64> {
    crate::validate::ensure_non_empty("population", data)?;
    crate::validate::ensure_finite_values("population", data)?;
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(AuditError::invalid(
            "p",
            p,
            "quantile probability must be in [0, 1]",
        ));
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(quantile_sorted(&sorted, p))
}

/// R-7 quantile over data already sorted ascending.
pub(crate) fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let frac = h - h.floor();

    if lo >= n - 1 {
        return sorted[n - 1];
    }
    if frac == 0.0 {
        return sorted[lo];
    }
    sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_population() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((quantile(&data, 0.5).unwrap() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn extremes() {
        let data = vec![5.0, 1.0, 3.0];
        assert!((quantile(&data, 0.0).unwrap() - 1.0).abs() < 1e-10);
        assert!((quantile(&data, 1.0).unwrap() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn interpolates_between_order_statistics() {
        // R-7 on [1..6] at p=0.25: h = 1.25, so 2 + 0.25*(3-2)
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert!((quantile(&data, 0.25).unwrap() - 2.25).abs() < 1e-10);
    }

    #[test]
    fn empty_population_errors() {
        assert!(matches!(quantile(&[], 0.5), Err(AuditError::EmptyInput(_))));
    }

    #[test]
    fn out_of_range_probability_errors() {
        assert!(quantile(&[1.0], 1.5).is_err());
        assert!(quantile(&[1.0], -0.1).is_err());
    }
}
