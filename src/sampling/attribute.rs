//! Attribute and acceptance sampling.
//!
//! Both estimators run the same normal-approximation power argument: a
//! standardized effect size, the z-values for the chosen significance level
//! and power, and `n = ((z_alpha + z_power) / effect)^2` rounded up.

use serde::{Deserialize, Serialize};

use crate::distributions::probit;
use crate::error::{AuditError, Result};

/// Parameters for estimating an attribute (error-rate) sample size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeParams {
    /// Number of transactions in the population.
    pub population_size: u64,
    /// Deviation rate the auditor expects to find.
    pub expected_rate: f64,
    /// Deviation rate the auditor is prepared to tolerate.
    pub tolerable_rate: f64,
    /// Population variability as a fraction of its size.
    pub sigma_rate: f64,
    /// Significance level of the test.
    pub sig_level: f64,
    /// Statistical power of the test.
    pub power: f64,
}

impl AttributeParams {
    /// Parameters with the conventional risk settings: 30% variability,
    /// 5% significance, 80% power.
    pub fn new(population_size: u64, expected_rate: f64, tolerable_rate: f64) -> Self {
        Self {
            population_size,
            expected_rate,
            tolerable_rate,
            sigma_rate: 0.3,
            sig_level: 0.05,
            power: 0.8,
        }
    }
}

/// Parameters for estimating a monetary (amount) sample size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonetaryAttributeParams {
    /// Total amount under audit.
    pub account_balance: f64,
    /// Average transaction value.
    pub mean_amount: f64,
    /// Detectable error as a fraction of the mean transaction.
    pub materiality_rate: f64,
    /// Transaction-amount variability (same units as the amounts).
    pub sigma: f64,
    /// Significance level of the test.
    pub sig_level: f64,
    /// Statistical power of the test.
    pub power: f64,
}

impl MonetaryAttributeParams {
    /// Parameters with the conventional risk settings: 5% materiality,
    /// 5% significance, 80% power.
    pub fn new(account_balance: f64, mean_amount: f64, sigma: f64) -> Self {
        Self {
            account_balance,
            mean_amount,
            materiality_rate: 0.05,
            sigma,
            sig_level: 0.05,
            power: 0.8,
        }
    }
}

/// Sample size to bound the estimated deviation rate within the tolerable
/// rate, given the expected rate.
///
/// The population size scales both the detectable amount and its spread,
/// so it cancels in the standardized effect; it is still validated because
/// an empty population has nothing to sample.
///
/// # Errors
///
/// `InvalidParameter` when `tolerable_rate <= expected_rate` (no finite
/// sample resolves a non-positive effect), or when any rate, level, or the
/// population size is outside its domain.
pub fn attribute_sample_size(params: &AttributeParams) -> Result<u64> {
    if params.population_size == 0 {
        return Err(AuditError::invalid(
            "population_size",
            0.0,
            "population must contain at least one transaction",
        ));
    }
    if !params.expected_rate.is_finite()
        || params.expected_rate < 0.0
        || params.expected_rate >= 1.0
    {
        return Err(AuditError::invalid(
            "expected_rate",
            params.expected_rate,
            "must be in [0, 1)",
        ));
    }
    if !params.tolerable_rate.is_finite()
        || params.tolerable_rate <= 0.0
        || params.tolerable_rate > 1.0
    {
        return Err(AuditError::invalid(
            "tolerable_rate",
            params.tolerable_rate,
            "must be in (0, 1]",
        ));
    }
    if params.tolerable_rate <= params.expected_rate {
        return Err(AuditError::invalid(
            "tolerable_rate",
            params.tolerable_rate,
            "must exceed expected_rate; the effect size is otherwise non-positive",
        ));
    }
    crate::validate::ensure_positive("sigma_rate", params.sigma_rate)?;
    crate::validate::ensure_unit_open("sig_level", params.sig_level)?;
    crate::validate::ensure_unit_open("power", params.power)?;

    let effect = (params.tolerable_rate - params.expected_rate) / params.sigma_rate;
    Ok(power_sample_size(effect, params.sig_level, params.power))
}

/// Sample size for substantive testing of monetary amounts.
///
/// # Errors
///
/// `InvalidParameter` for a non-positive balance, mean, or sigma, or any
/// rate/level outside its domain.
pub fn attribute_sample_size_amount(params: &MonetaryAttributeParams) -> Result<u64> {
    crate::validate::ensure_positive("account_balance", params.account_balance)?;
    crate::validate::ensure_positive("mean_amount", params.mean_amount)?;
    crate::validate::ensure_unit_open("materiality_rate", params.materiality_rate)?;
    crate::validate::ensure_positive("sigma", params.sigma)?;
    crate::validate::ensure_unit_open("sig_level", params.sig_level)?;
    crate::validate::ensure_unit_open("power", params.power)?;

    let effect = params.materiality_rate * params.mean_amount / params.sigma;
    Ok(power_sample_size(effect, params.sig_level, params.power))
}

/// Sample size to test whether an account balance is fairly stated.
///
/// Acceptance sampling estimates monetary error with the same confidence
/// machinery as attribute sampling over amounts; this is the same
/// computation under the name auditors use for it.
pub fn acceptance_sample_size(params: &MonetaryAttributeParams) -> Result<u64> {
    attribute_sample_size_amount(params)
}

fn power_sample_size(effect: f64, sig_level: f64, power: f64) -> u64 {
    let z = probit(1.0 - sig_level) + probit(power);
    (z / effect).powi(2).ceil() as u64
}
