//! Numeric constants shared across the toolkit.

/// Minimum number of analyzed observations for a meaningful Benford test.
///
/// Below this, expected cell counts are too small for the chi-square
/// approximation to hold.
pub const MIN_BENFORD_OBSERVATIONS: usize = 30;

/// Minimum population size accepted by any normality test.
pub const MIN_NORMALITY_OBSERVATIONS: usize = 3;

/// Minimum population size for the D'Agostino K-squared test; its skewness
/// and kurtosis transforms are undefined below this.
pub const MIN_DAGOSTINO_OBSERVATIONS: usize = 8;

/// Default IQR multiplier for outlier detection.
pub const DEFAULT_IQR_THRESHOLD: f64 = 1.5;

/// Default Z-score threshold for outlier detection.
pub const DEFAULT_ZSCORE_THRESHOLD: f64 = 3.0;

/// Default modified Z-score threshold for outlier detection.
pub const DEFAULT_MODIFIED_ZSCORE_THRESHOLD: f64 = 3.5;

/// Consistency factor relating the median absolute deviation to the
/// standard deviation of a normal population (Phi^-1(0.75)).
pub const MAD_CONSISTENCY: f64 = 0.6745;

/// Default significance threshold for normality decisions.
pub const DEFAULT_NORMALITY_ALPHA: f64 = 0.05;
