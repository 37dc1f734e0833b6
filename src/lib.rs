//! # audit-analytics
//!
//! Statistical sampling and digit-frequency analysis for audit procedures.
//!
//! This crate provides the statistical core of an audit-analytics workflow
//! as a library of pure, stateless functions over in-memory numeric and
//! tabular data:
//! - Sample-size estimators: discovery, attribute, acceptance and
//!   monetary-unit sampling, stratified Neyman allocation
//! - Descriptive and agreement checks: footing, summary statistics,
//!   normality tests, outlier detection
//! - Benford's-law digit analysis with a chi-square goodness-of-fit verdict
//!
//! Everything is synchronous and reentrant: no shared state, no I/O beyond
//! the caller-supplied input, nothing to cancel. Callers may fan
//! computations over disjoint populations in parallel with no coordination.
//!
//! ## Quick Start
//!
//! ```
//! use audit_analytics::{benford_analysis, discovery_sample_size, DigitPosition};
//!
//! // How many transactions must we inspect to catch a 5% error stream
//! // with 95% confidence?
//! assert_eq!(discovery_sample_size(0.95, 0.05).unwrap(), 59);
//!
//! // Does a ledger's leading-digit distribution look natural?
//! let amounts: Vec<f64> = (1..=500).map(|i| f64::from(i) * 12.7).collect();
//! let report = benford_analysis(&amounts, DigitPosition::First).unwrap();
//! println!("chi-square {:.2}, p = {:.4}", report.chi_square, report.p_value);
//! ```
//!
//! All inputs are validated at function entry; invalid parameters,
//! missing columns, and undersized populations surface as [`AuditError`]
//! before any computation runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod constants;
mod error;
mod table;
mod validate;

// Functional modules
pub mod benford;
pub mod distributions;
pub mod output;
pub mod sampling;
pub mod statistics;

// Re-exports for the public API
pub use constants::{
    DEFAULT_IQR_THRESHOLD, DEFAULT_MODIFIED_ZSCORE_THRESHOLD, DEFAULT_NORMALITY_ALPHA,
    DEFAULT_ZSCORE_THRESHOLD, MIN_BENFORD_OBSERVATIONS, MIN_DAGOSTINO_OBSERVATIONS,
    MIN_NORMALITY_OBSERVATIONS,
};
pub use error::{AuditError, Result};
pub use table::{Column, DataTable};

pub use benford::{
    benford_analysis, expected_first_digit_frequency, expected_second_digit_frequency,
    first_digit, second_digit, BenfordReport, DigitCell, DigitPosition,
};
pub use sampling::{
    acceptance_sample_size, attribute_sample_size, attribute_sample_size_amount,
    discovery_sample_size, monetary_unit_sample_size, monetary_unit_select,
    random_sample_indices, reliability_factor, stratified_sample_allocation, Allocation,
    AttributeParams, MonetaryAttributeParams, MusParams, MusSelection, Stratum,
    StratumAllocation,
};
pub use statistics::{
    compute_summary_stats, detect_outliers, foot, foot_and_agree, quantile, summarize_column,
    test_normality, FootingResult, NormalityMethod, NormalityParams, NormalityTest,
    OutlierMethod, OutlierReport, SummaryStats,
};
