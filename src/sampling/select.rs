//! Sample selection.
//!
//! The estimators in this module's siblings size a sample; these functions
//! draw it. Both selectors accept an optional seed so a reviewer can
//! reproduce the exact sample named in the workpapers.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

fn make_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_os_rng(),
    }
}

/// Draw `sample_size` distinct indices from `0..population_size` uniformly
/// at random, without replacement. Returned ascending.
///
/// # Errors
///
/// `EmptyInput` for an empty population, `InvalidParameter` for a zero
/// sample size or one exceeding the population.
pub fn random_sample_indices(
    population_size: usize,
    sample_size: usize,
    seed: Option<u64>,
) -> Result<Vec<usize>> {
    if population_size == 0 {
        return Err(AuditError::EmptyInput("population"));
    }
    if sample_size == 0 {
        return Err(AuditError::invalid(
            "sample_size",
            0.0,
            "must be at least 1",
        ));
    }
    if sample_size > population_size {
        return Err(AuditError::invalid(
            "sample_size",
            sample_size as f64,
            "cannot exceed the population size",
        ));
    }

    // Partial Fisher-Yates: only the first sample_size slots are settled
    let mut rng = make_rng(seed);
    let mut indices: Vec<usize> = (0..population_size).collect();
    for i in 0..sample_size {
        let j = rng.random_range(i..population_size);
        indices.swap(i, j);
    }

    let mut picked = indices[..sample_size].to_vec();
    picked.sort_unstable();
    Ok(picked)
}

/// A monetary-unit (PPS) selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusSelection {
    /// Selected item indices, ascending and deduplicated. An item large
    /// enough to contain several selection points appears once.
    pub indices: Vec<usize>,
    /// Monetary distance between selection points.
    pub sampling_interval: f64,
    /// Random start within the first interval.
    pub start: f64,
}

/// Systematic monetary-unit selection: selection probability proportional
/// to item value.
///
/// Walks the cumulative positive amounts and selects the item containing
/// each point `start + k * interval`. Non-positive amounts can never be
/// hit.
///
/// # Errors
///
/// `EmptyInput` for an empty amount list, `InvalidParameter` for non-finite
/// amounts, a zero sample size, or a population with no positive value.
pub fn monetary_unit_select(
    amounts: &[f64],
    sample_size: usize,
    seed: Option<u64>,
) -> Result<MusSelection> {
    crate::validate::ensure_non_empty("amounts", amounts)?;
    crate::validate::ensure_finite_values("amounts", amounts)?;
    if sample_size == 0 {
        return Err(AuditError::invalid(
            "sample_size",
            0.0,
            "must be at least 1",
        ));
    }
    let total: f64 = amounts.iter().filter(|&&a| a > 0.0).sum();
    if total <= 0.0 {
        return Err(AuditError::invalid(
            "amounts",
            total,
            "population has no positive value to sample from",
        ));
    }

    let interval = total / sample_size as f64;
    let mut rng = make_rng(seed);
    let start = rng.random_range(0.0..interval);

    let mut indices = Vec::with_capacity(sample_size);
    let mut cumulative = 0.0;
    let mut k = 0usize;
    for (i, &amount) in amounts.iter().enumerate() {
        if amount <= 0.0 {
            continue;
        }
        cumulative += amount;
        while k < sample_size && start + k as f64 * interval <= cumulative {
            if indices.last() != Some(&i) {
                indices.push(i);
            }
            k += 1;
        }
        if k == sample_size {
            break;
        }
    }
    // Rounding in the cumulative walk can strand the final point
    if k < sample_size {
        if let Some(last_positive) = amounts.iter().rposition(|&a| a > 0.0) {
            if indices.last() != Some(&last_positive) {
                indices.push(last_positive);
            }
        }
    }

    Ok(MusSelection {
        indices,
        sampling_interval: interval,
        start,
    })
}
