//! End-to-end tests of the Benford analyzer.

use audit_analytics::{benford_analysis, AuditError, DigitPosition};

/// Powers of a fixed base: mantissas equidistribute on a log scale, so the
/// population follows Benford's law essentially exactly.
fn benford_population(n: usize) -> Vec<f64> {
    const BASE: f64 = 0.618_033_988_749_894_9;
    (0..n)
        .map(|i| 10.0_f64.powf((i as f64 * BASE).fract()) * 1000.0)
        .collect()
}

#[test]
fn benford_generator_is_not_rejected() {
    let report = benford_analysis(&benford_population(500), DigitPosition::First).unwrap();
    assert!(report.p_value > 0.05, "chi2 = {:.3}", report.chi_square);
    assert!(report.conforms(0.05));
    assert_eq!(report.degrees_of_freedom, 8);

    // Digit 1 leads, digit 9 trails
    let freq_1 = report.cells[0].observed_freq;
    let freq_9 = report.cells[8].observed_freq;
    assert!(freq_1 > 0.25 && freq_1 < 0.35, "freq(1) = {freq_1}");
    assert!(freq_9 < 0.10, "freq(9) = {freq_9}");
}

#[test]
fn uniform_population_is_rejected() {
    // Uniformly spaced five-digit values: leading digits nearly flat
    let values: Vec<f64> = (10_000..100_000).step_by(90).map(|v| v as f64).collect();
    let report = benford_analysis(&values, DigitPosition::First).unwrap();
    assert!(report.p_value < 0.05, "chi2 = {:.3}", report.chi_square);
    assert!(!report.conforms(0.05));
}

#[test]
fn dropped_values_are_reported_not_fatal() {
    let mut values = benford_population(100);
    values.extend([0.0, 0.0, -500.0, f64::NAN, f64::INFINITY]);
    let report = benford_analysis(&values, DigitPosition::First).unwrap();
    assert_eq!(report.analyzed, 100);
    assert_eq!(report.dropped, 5);
}

#[test]
fn thirty_observation_floor() {
    // 40 values, 11 unusable: below the floor
    let mut values = benford_population(29);
    values.extend(std::iter::repeat(-1.0).take(11));
    let err = benford_analysis(&values, DigitPosition::First).unwrap_err();
    assert!(matches!(
        err,
        AuditError::InsufficientData { required: 30, actual: 29 }
    ));
}

#[test]
fn expected_counts_reconcile() {
    let report = benford_analysis(&benford_population(300), DigitPosition::First).unwrap();
    let expected_total: f64 = report.cells.iter().map(|c| c.expected_count).sum();
    assert!((expected_total - 300.0).abs() < 1e-9);

    let observed_total: u64 = report.cells.iter().map(|c| c.observed_count).sum();
    assert_eq!(observed_total, 300);
}

#[test]
fn second_digit_position_is_supported() {
    let report = benford_analysis(&benford_population(500), DigitPosition::Second).unwrap();
    assert_eq!(report.cells.len(), 10);
    assert_eq!(report.degrees_of_freedom, 9);
    // Second-digit expectations are much flatter than first-digit ones
    let spread = report.cells[0].expected_freq - report.cells[9].expected_freq;
    assert!(spread > 0.0 && spread < 0.05);
}
