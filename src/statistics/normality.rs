//! Normality testing.
//!
//! Two moment-based goodness-of-fit tests:
//!
//! - **D'Agostino K-squared** (default): combines a transformed skewness
//!   statistic (D'Agostino 1970) with a transformed kurtosis statistic
//!   (Anscombe & Glynn 1983); their squared sum is chi-square with 2 df
//!   under normality.
//! - **Jarque-Bera**: the asymptotic skewness/kurtosis statistic, also
//!   chi-square with 2 df.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_NORMALITY_ALPHA, MIN_DAGOSTINO_OBSERVATIONS, MIN_NORMALITY_OBSERVATIONS,
};
use crate::distributions::chi_square_sf;
use crate::error::{AuditError, Result};
use crate::statistics::summary::central_moments;

/// Normality test method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalityMethod {
    /// D'Agostino's K-squared omnibus test.
    DAgostino,
    /// The Jarque-Bera test.
    JarqueBera,
}

/// Test configuration.
#[derive(Debug, Clone)]
pub struct NormalityParams {
    /// Which test to run.
    pub method: NormalityMethod,
    /// Significance threshold for the `is_normal` verdict.
    pub alpha: f64,
}

impl Default for NormalityParams {
    fn default() -> Self {
        Self {
            method: NormalityMethod::DAgostino,
            alpha: DEFAULT_NORMALITY_ALPHA,
        }
    }
}

/// Outcome of a normality test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalityTest {
    /// Method used.
    pub method: NormalityMethod,
    /// The test statistic (chi-square distributed with 2 df under H0).
    pub statistic: f64,
    /// Probability of a statistic at least this large under normality.
    pub p_value: f64,
    /// Significance threshold the verdict was judged under.
    pub alpha: f64,
    /// True when `p_value > alpha` (normality is not rejected).
    pub is_normal: bool,
}

/// Test a population for normality.
///
/// # Errors
///
/// `InsufficientData` below the method's minimum population size (3
/// overall, 8 for D'Agostino), `InvalidParameter` for non-finite values, a
/// zero-variance population, or `alpha` outside (0, 1).
pub fn test_normality(values: &[f64], params: &NormalityParams) -> Result<NormalityTest> {
    crate::validate::ensure_unit_open("alpha", params.alpha)?;
    crate::validate::ensure_finite_values("population", values)?;

    if values.len() < MIN_NORMALITY_OBSERVATIONS {
        return Err(AuditError::InsufficientData {
            required: MIN_NORMALITY_OBSERVATIONS,
            actual: values.len(),
        });
    }
    if params.method == NormalityMethod::DAgostino && values.len() < MIN_DAGOSTINO_OBSERVATIONS {
        return Err(AuditError::InsufficientData {
            required: MIN_DAGOSTINO_OBSERVATIONS,
            actual: values.len(),
        });
    }

    let moments = central_moments(values);
    if moments.m2 <= 0.0 {
        return Err(AuditError::invalid(
            "population",
            moments.m2,
            "population has zero variance",
        ));
    }

    let g1 = moments.m3 / moments.m2.powf(1.5);
    let b2 = moments.m4 / (moments.m2 * moments.m2);
    let n = values.len() as f64;

    let statistic = match params.method {
        NormalityMethod::DAgostino => {
            let z1 = skewness_z(g1, n);
            let z2 = kurtosis_z(b2, n);
            z1 * z1 + z2 * z2
        }
        NormalityMethod::JarqueBera => n / 6.0 * (g1 * g1 + (b2 - 3.0).powi(2) / 4.0),
    };
    let p_value = chi_square_sf(statistic, 2);

    Ok(NormalityTest {
        method: params.method,
        statistic,
        p_value,
        alpha: params.alpha,
        is_normal: p_value > params.alpha,
    })
}

/// D'Agostino (1970) transformation of sample skewness to a standard
/// normal deviate.
fn skewness_z(g1: f64, n: f64) -> f64 {
    let y = g1 * ((n + 1.0) * (n + 3.0) / (6.0 * (n - 2.0))).sqrt();
    let beta2 = 3.0 * (n * n + 27.0 * n - 70.0) * (n + 1.0) * (n + 3.0)
        / ((n - 2.0) * (n + 5.0) * (n + 7.0) * (n + 9.0));
    let w2 = -1.0 + (2.0 * (beta2 - 1.0)).sqrt();
    let delta = 1.0 / (0.5 * w2.ln()).sqrt();
    let alpha = (2.0 / (w2 - 1.0)).sqrt();
    let t = y / alpha;
    delta * (t + (t * t + 1.0).sqrt()).ln()
}

/// Anscombe & Glynn (1983) transformation of sample kurtosis to a standard
/// normal deviate.
fn kurtosis_z(b2: f64, n: f64) -> f64 {
    let mean_b2 = 3.0 * (n - 1.0) / (n + 1.0);
    let var_b2 =
        24.0 * n * (n - 2.0) * (n - 3.0) / ((n + 1.0).powi(2) * (n + 3.0) * (n + 5.0));
    let x = (b2 - mean_b2) / var_b2.sqrt();

    let beta1 = 6.0 * (n * n - 5.0 * n + 2.0) / ((n + 7.0) * (n + 9.0))
        * (6.0 * (n + 3.0) * (n + 5.0) / (n * (n - 2.0) * (n - 3.0))).sqrt();
    let a = 6.0 + 8.0 / beta1 * (2.0 / beta1 + (1.0 + 4.0 / (beta1 * beta1)).sqrt());

    let num = 1.0 - 2.0 / (9.0 * a);
    let den = (1.0 - 2.0 / a) / (1.0 + x * (2.0 / (a - 4.0)).sqrt());
    (num - den.cbrt()) / (2.0 / (9.0 * a)).sqrt()
}
