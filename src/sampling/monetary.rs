//! Monetary-unit sampling (MUS).

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

/// Parameters for a monetary-unit sample-size estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusParams {
    /// Total recorded value of the population.
    pub population_value: f64,
    /// Largest error amount the auditor can tolerate.
    pub tolerable_error: f64,
    /// Confidence level.
    pub confidence: f64,
    /// Error rate the auditor expects to find; inflates the reliability
    /// factor when positive.
    pub expected_error_rate: f64,
}

impl MusParams {
    /// Parameters at 95% confidence with no expected errors.
    pub fn new(population_value: f64, tolerable_error: f64) -> Self {
        Self {
            population_value,
            tolerable_error,
            confidence: 0.95,
            expected_error_rate: 0.0,
        }
    }
}

/// Reliability factor for zero expected errors at the given confidence.
///
/// This is the Poisson-derived factor `-ln(1 - confidence)`: the expected
/// number of sampled monetary units containing an error such that finding
/// none rejects the tolerable-error hypothesis at the chosen confidence.
///
/// # Errors
///
/// `InvalidParameter` unless `confidence` is strictly between 0 and 1.
pub fn reliability_factor(confidence: f64) -> Result<f64> {
    crate::validate::ensure_unit_open("confidence", confidence)?;
    Ok(-(1.0 - confidence).ln())
}

/// Monetary-unit sample size.
///
/// `n = ceil(population_value * reliability_factor / tolerable_error)`.
///
/// ```
/// use audit_analytics::{monetary_unit_sample_size, MusParams};
///
/// let n = monetary_unit_sample_size(&MusParams::new(1_000_000.0, 50_000.0)).unwrap();
/// assert_eq!(n, 60);
/// ```
///
/// # Errors
///
/// `InvalidParameter` for a non-positive tolerable error, a tolerable error
/// above the population value, or a confidence/expected rate outside its
/// domain.
pub fn monetary_unit_sample_size(params: &MusParams) -> Result<u64> {
    crate::validate::ensure_positive("population_value", params.population_value)?;
    crate::validate::ensure_positive("tolerable_error", params.tolerable_error)?;
    if params.tolerable_error > params.population_value {
        return Err(AuditError::invalid(
            "tolerable_error",
            params.tolerable_error,
            "must not exceed the population value",
        ));
    }
    if !params.expected_error_rate.is_finite()
        || params.expected_error_rate < 0.0
        || params.expected_error_rate >= 1.0
    {
        return Err(AuditError::invalid(
            "expected_error_rate",
            params.expected_error_rate,
            "must be in [0, 1)",
        ));
    }

    let mut factor = reliability_factor(params.confidence)?;
    if params.expected_error_rate > 0.0 {
        factor *= 1.0 + params.expected_error_rate;
    }

    Ok((params.population_value * factor / params.tolerable_error).ceil() as u64)
}
