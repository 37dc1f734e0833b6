//! Discovery sampling.

use crate::error::Result;

/// Sample size needed to discover at least one error with the given
/// confidence, assuming the true error rate equals `intolerable_rate`.
///
/// Formula: `n = ceil(ln(1 - confidence) / ln(1 - intolerable_rate))`.
///
/// ```
/// use audit_analytics::discovery_sample_size;
///
/// assert_eq!(discovery_sample_size(0.95, 0.05).unwrap(), 59);
/// ```
///
/// # Errors
///
/// `InvalidParameter` unless both arguments are strictly between 0 and 1;
/// either boundary makes the formula undefined.
pub fn discovery_sample_size(confidence: f64, intolerable_rate: f64) -> Result<u64> {
    crate::validate::ensure_unit_open("confidence", confidence)?;
    crate::validate::ensure_unit_open("intolerable_rate", intolerable_rate)?;

    let n = (1.0 - confidence).ln() / (1.0 - intolerable_rate).ln();
    Ok(n.ceil() as u64)
}
