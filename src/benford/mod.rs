//! Benford's-law digit-frequency analysis.
//!
//! Many naturally occurring monetary populations follow the logarithmic
//! leading-digit distribution; invented figures usually do not. The
//! analyzer compares observed digit frequencies against the Benford
//! expectation with a chi-square goodness-of-fit test.

mod digits;

use serde::{Deserialize, Serialize};

use crate::constants::MIN_BENFORD_OBSERVATIONS;
use crate::distributions::chi_square_sf;
use crate::error::{AuditError, Result};

pub use digits::{first_digit, second_digit};

/// Which significant digit to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitPosition {
    /// First significant digit; nine buckets (1-9), eight degrees of
    /// freedom.
    First,
    /// Second significant digit; ten buckets (0-9), nine degrees of
    /// freedom.
    Second,
}

/// One digit bucket of a Benford analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitCell {
    /// The digit this bucket counts.
    pub digit: u8,
    /// Observed occurrences.
    pub observed_count: u64,
    /// Expected occurrences under Benford's law.
    pub expected_count: f64,
    /// Observed relative frequency.
    pub observed_freq: f64,
    /// Expected relative frequency under Benford's law.
    pub expected_freq: f64,
    /// This bucket's contribution to the chi-square statistic.
    pub chi2_component: f64,
}

/// Digit-frequency distribution with its goodness-of-fit verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenfordReport {
    /// Digit position analyzed.
    pub position: DigitPosition,
    /// Per-digit buckets, ascending by digit.
    pub cells: Vec<DigitCell>,
    /// Aggregate chi-square statistic.
    pub chi_square: f64,
    /// Probability of a statistic at least this large if the population
    /// follows Benford's law.
    pub p_value: f64,
    /// Degrees of freedom of the test (buckets minus one).
    pub degrees_of_freedom: u32,
    /// Observations that carried a usable digit.
    pub analyzed: usize,
    /// Observations dropped for having no defined leading digit
    /// (non-positive or non-finite).
    pub dropped: usize,
}

impl BenfordReport {
    /// Whether the population is consistent with Benford's law at the
    /// given significance level.
    pub fn conforms(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}

/// Expected first-digit frequency under Benford's law: `log10(1 + 1/d)`.
///
/// # Panics
///
/// Panics if `digit` is outside 1-9.
pub fn expected_first_digit_frequency(digit: u8) -> f64 {
    assert!((1..=9).contains(&digit), "first digit must be 1-9");
    (1.0 + 1.0 / f64::from(digit)).log10()
}

/// Expected second-digit frequency under Benford's law:
/// `sum over a of log10(1 + 1/(10a + d))`.
///
/// # Panics
///
/// Panics if `digit` is outside 0-9.
pub fn expected_second_digit_frequency(digit: u8) -> f64 {
    assert!(digit <= 9, "second digit must be 0-9");
    (1..=9)
        .map(|a| (1.0 + 1.0 / f64::from(10 * a + digit)).log10())
        .sum()
}

/// Analyze the digit-frequency distribution of a population.
///
/// Values without a defined leading digit (zero, negative, non-finite) are
/// dropped silently; the report carries how many. At least 30 analyzable
/// observations are required for the chi-square approximation to mean
/// anything.
///
/// # Errors
///
/// `EmptyInput` for a zero-length population, `InsufficientData` when
/// fewer than 30 values survive the drop.
pub fn benford_analysis(values: &[f64], position: DigitPosition) -> Result<BenfordReport> {
    crate::validate::ensure_non_empty("population", values)?;

    let observed_digits: Vec<u8> = values
        .iter()
        .filter(|&&v| digits::analyzable(v))
        .map(|&v| {
            let (first, second) = digits::significant_digits(v);
            match position {
                DigitPosition::First => first,
                DigitPosition::Second => second,
            }
        })
        .collect();

    let analyzed = observed_digits.len();
    let dropped = values.len() - analyzed;
    if analyzed < MIN_BENFORD_OBSERVATIONS {
        return Err(AuditError::InsufficientData {
            required: MIN_BENFORD_OBSERVATIONS,
            actual: analyzed,
        });
    }

    let buckets: Vec<u8> = match position {
        DigitPosition::First => (1..=9).collect(),
        DigitPosition::Second => (0..=9).collect(),
    };

    let mut counts = vec![0u64; buckets.len()];
    let offset = buckets[0];
    for d in &observed_digits {
        counts[usize::from(d - offset)] += 1;
    }

    let total = analyzed as f64;
    let mut chi_square = 0.0;
    let cells: Vec<DigitCell> = buckets
        .iter()
        .zip(&counts)
        .map(|(&digit, &observed_count)| {
            let expected_freq = match position {
                DigitPosition::First => expected_first_digit_frequency(digit),
                DigitPosition::Second => expected_second_digit_frequency(digit),
            };
            let expected_count = expected_freq * total;
            let deviation = observed_count as f64 - expected_count;
            let chi2_component = deviation * deviation / expected_count;
            chi_square += chi2_component;
            DigitCell {
                digit,
                observed_count,
                expected_count,
                observed_freq: observed_count as f64 / total,
                expected_freq,
                chi2_component,
            }
        })
        .collect();

    let degrees_of_freedom = buckets.len() as u32 - 1;

    Ok(BenfordReport {
        position,
        cells,
        chi_square,
        p_value: chi_square_sf(chi_square, degrees_of_freedom),
        degrees_of_freedom,
        analyzed,
        dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Values whose mantissas equidistribute on a log scale, the textbook
    /// Benford generator.
    fn benford_population(n: usize) -> Vec<f64> {
        const PHI: f64 = 0.618_033_988_749_894_9;
        (0..n)
            .map(|i| 10.0_f64.powf((i as f64 * PHI).fract()) * 100.0)
            .collect()
    }

    #[test]
    fn expected_first_digit_frequencies_sum_to_one() {
        let sum: f64 = (1..=9).map(expected_first_digit_frequency).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((expected_first_digit_frequency(1) - 0.30103).abs() < 1e-5);
        assert!((expected_first_digit_frequency(9) - 0.04576).abs() < 1e-5);
    }

    #[test]
    fn expected_second_digit_frequencies_sum_to_one_and_decrease() {
        let freqs: Vec<f64> = (0..=9).map(expected_second_digit_frequency).collect();
        let sum: f64 = freqs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(freqs.windows(2).all(|w| w[0] > w[1]));
        assert!((freqs[0] - 0.119_68).abs() < 1e-4);
    }

    #[test]
    fn benford_population_conforms() {
        let report = benford_analysis(&benford_population(400), DigitPosition::First).unwrap();
        assert_eq!(report.analyzed, 400);
        assert_eq!(report.dropped, 0);
        assert_eq!(report.degrees_of_freedom, 8);
        assert!(report.p_value > 0.05, "chi2 = {}", report.chi_square);
        assert!(report.conforms(0.05));
    }

    #[test]
    fn uniform_first_digits_deviate() {
        // 45 values of each leading digit: flat, nothing like Benford
        let values: Vec<f64> = (1..=9)
            .flat_map(|d| std::iter::repeat(f64::from(d)).take(45))
            .collect();
        let report = benford_analysis(&values, DigitPosition::First).unwrap();
        assert!(report.p_value < 0.05, "chi2 = {}", report.chi_square);
        assert!(!report.conforms(0.05));
    }

    #[test]
    fn drops_are_counted() {
        let mut values = benford_population(50);
        values.extend([0.0, -12.5, f64::NAN]);
        let report = benford_analysis(&values, DigitPosition::First).unwrap();
        assert_eq!(report.analyzed, 50);
        assert_eq!(report.dropped, 3);
    }

    #[test]
    fn counts_reconcile_with_analyzed() {
        let report = benford_analysis(&benford_population(100), DigitPosition::First).unwrap();
        let counted: u64 = report.cells.iter().map(|c| c.observed_count).sum();
        assert_eq!(counted as usize, report.analyzed);
    }

    #[test]
    fn too_few_observations_error() {
        let values = benford_population(29);
        assert!(matches!(
            benford_analysis(&values, DigitPosition::First),
            Err(AuditError::InsufficientData { required: 30, actual: 29 })
        ));
    }

    #[test]
    fn second_digit_analysis_has_ten_buckets() {
        let report = benford_analysis(&benford_population(400), DigitPosition::Second).unwrap();
        assert_eq!(report.cells.len(), 10);
        assert_eq!(report.degrees_of_freedom, 9);
        assert_eq!(report.cells[0].digit, 0);
    }
}
