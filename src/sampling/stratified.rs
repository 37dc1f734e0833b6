//! Stratified sampling via Neyman allocation.

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

/// A named subgroup of the population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stratum {
    /// Stratum label.
    pub name: String,
    /// Number of items in the stratum.
    pub size: u64,
    /// Mean item value.
    pub mean: f64,
    /// Standard deviation of item values.
    pub std_dev: f64,
}

impl Stratum {
    /// Construct a stratum.
    pub fn new(name: impl Into<String>, size: u64, mean: f64, std_dev: f64) -> Self {
        Self {
            name: name.into(),
            size,
            mean,
            std_dev,
        }
    }
}

/// One stratum's share of the allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StratumAllocation {
    /// Stratum label, matching the input.
    pub name: String,
    /// Neyman weight (`size * std_dev`).
    pub weight: f64,
    /// Items to sample from this stratum.
    pub allocated: u64,
}

/// A complete allocation over all strata, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    /// Requested total sample size; the per-stratum counts sum to exactly
    /// this.
    pub total: u64,
    /// Per-stratum allocations, in input order.
    pub strata: Vec<StratumAllocation>,
}

impl Allocation {
    /// Allocated count for a stratum by name.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.strata
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.allocated)
    }
}

/// Allocate a total sample across strata by Neyman allocation.
///
/// Each stratum's share is proportional to `size * std_dev`. Fractional
/// shares are settled by the largest-remainder method: floor every share,
/// then hand the leftover units to the largest remainders (ties broken by
/// larger weight, then input order), so the counts always sum to exactly
/// `total_sample_size`. A stratum with zero size or zero variance gets
/// nothing.
///
/// # Errors
///
/// `EmptyInput` for an empty stratum list, `InvalidParameter` for a zero
/// total, a non-finite or negative standard deviation, or when every
/// stratum has zero weight (no defensible allocation exists).
pub fn stratified_sample_allocation(
    strata: &[Stratum],
    total_sample_size: u64,
) -> Result<Allocation> {
    if strata.is_empty() {
        return Err(AuditError::EmptyInput("strata"));
    }
    if total_sample_size == 0 {
        return Err(AuditError::invalid(
            "total_sample_size",
            0.0,
            "must be at least 1",
        ));
    }
    for stratum in strata {
        crate::validate::ensure_non_negative("std_dev", stratum.std_dev)?;
    }

    let weights: Vec<f64> = strata
        .iter()
        .map(|s| s.size as f64 * s.std_dev)
        .collect();
    let total_weight: f64 = weights.iter().sum();
    if total_weight <= 0.0 {
        return Err(AuditError::invalid(
            "strata",
            total_weight,
            "every stratum has zero weight; no defensible allocation exists",
        ));
    }

    let shares: Vec<f64> = weights
        .iter()
        .map(|w| w / total_weight * total_sample_size as f64)
        .collect();
    let mut allocated: Vec<u64> = shares.iter().map(|s| s.floor() as u64).collect();
    let assigned: u64 = allocated.iter().sum();
    let leftover = total_sample_size.saturating_sub(assigned) as usize;

    // Largest-remainder settlement, restricted to strata that carry weight
    let mut order: Vec<usize> = (0..strata.len()).filter(|&i| weights[i] > 0.0).collect();
    order.sort_by(|&a, &b| {
        let rem_a = shares[a] - shares[a].floor();
        let rem_b = shares[b] - shares[b].floor();
        rem_b
            .total_cmp(&rem_a)
            .then(weights[b].total_cmp(&weights[a]))
            .then(a.cmp(&b))
    });
    for k in 0..leftover {
        allocated[order[k % order.len()]] += 1;
    }

    let strata_out = strata
        .iter()
        .zip(weights)
        .zip(allocated)
        .map(|((s, weight), allocated)| StratumAllocation {
            name: s.name.clone(),
            weight,
            allocated,
        })
        .collect();

    Ok(Allocation {
        total: total_sample_size,
        strata: strata_out,
    })
}
