//! Descriptive statistics and agreement checks.
//!
//! Everything here consumes a numeric population (or a table column) and
//! returns a small structured report:
//! - Footing and agreement verification
//! - Summary statistics (location, spread, quartiles, shape)
//! - Normality testing (D'Agostino K-squared, Jarque-Bera)
//! - Outlier detection (IQR, Z-score, modified Z-score)

mod footing;
mod normality;
mod outlier;
mod quantile;
mod summary;

pub use footing::{foot, foot_and_agree, FootingResult};
pub use normality::{test_normality, NormalityMethod, NormalityParams, NormalityTest};
pub use outlier::{detect_outliers, OutlierMethod, OutlierReport};
pub use quantile::quantile;
pub use summary::{compute_summary_stats, summarize_column, SummaryStats};
