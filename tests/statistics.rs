//! End-to-end tests of the descriptive and agreement checks.

use audit_analytics::{
    compute_summary_stats, detect_outliers, foot_and_agree, test_normality, AuditError,
    DataTable, NormalityParams, OutlierMethod,
};

fn ledger() -> DataTable {
    DataTable::new()
        .with_column("amount", vec![120.0, 340.5, 98.25, 441.25])
        .unwrap()
        .with_column("tax", vec![12.0, 34.05, 9.83, 44.13])
        .unwrap()
}

#[test]
fn footing_agrees_within_tolerance_only() {
    let table = ledger();

    let exact = foot_and_agree(&table, "amount", 1000.0, 0.0).unwrap();
    assert!(exact.agrees);
    assert!(exact.difference.abs() < 1e-12);

    // A single misstated row larger than the tolerance flips the verdict
    let misstated = foot_and_agree(&table, "amount", 1000.0 + 25.0, 10.0).unwrap();
    assert!(!misstated.agrees);
    let tolerated = foot_and_agree(&table, "amount", 1000.0 + 5.0, 10.0).unwrap();
    assert!(tolerated.agrees);
}

#[test]
fn footing_unknown_column() {
    assert!(matches!(
        foot_and_agree(&ledger(), "net", 0.0, 0.0),
        Err(AuditError::ColumnNotFound(name)) if name == "net"
    ));
}

#[test]
fn summary_of_single_value_is_defined() {
    let stats = compute_summary_stats(&[250.0]).unwrap();
    assert_eq!(stats.count, 1);
    assert!((stats.mean - 250.0).abs() < 1e-12);
    assert!(stats.std_dev.is_nan());
    assert!(stats.skewness.is_nan());
}

#[test]
fn iqr_flags_exactly_the_planted_outlier() {
    let report = detect_outliers(
        &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0],
        OutlierMethod::Iqr,
        None,
    )
    .unwrap();
    assert_eq!(report.flags, vec![false, false, false, false, false, true]);
    assert_eq!(report.n_outliers, 1);
}

#[test]
fn outlier_methods_agree_on_clean_data() {
    let clean: Vec<f64> = (0..50).map(|i| 100.0 + f64::from(i % 7)).collect();
    for method in [
        OutlierMethod::Iqr,
        OutlierMethod::ZScore,
        OutlierMethod::ModifiedZScore,
    ] {
        let report = detect_outliers(&clean, method, None).unwrap();
        assert_eq!(report.n_outliers, 0, "{method:?}");
        assert_eq!(report.flags.len(), clean.len());
    }
}

#[test]
fn normality_pipeline_on_table_columns() {
    // A column built from normal quantiles passes; a heavily skewed
    // column fails
    let n = 150;
    let normal: Vec<f64> = (0..n)
        .map(|i| {
            audit_analytics::distributions::probit((f64::from(i) + 0.5) / f64::from(n)) * 50.0
                + 1000.0
        })
        .collect();
    let skewed: Vec<f64> = (0..n)
        .map(|i| -(1.0 - (f64::from(i) + 0.5) / f64::from(n)).ln() * 300.0)
        .collect();

    let table = DataTable::new()
        .with_column("normal", normal)
        .unwrap()
        .with_column("skewed", skewed)
        .unwrap();

    let params = NormalityParams::default();
    let normal_col = table.column_values("normal").unwrap();
    let skewed_col = table.column_values("skewed").unwrap();

    assert!(test_normality(&normal_col, &params).unwrap().is_normal);
    assert!(!test_normality(&skewed_col, &params).unwrap().is_normal);
}

#[test]
fn normality_requires_three_values() {
    let err = test_normality(&[10.0, 20.0], &NormalityParams::default()).unwrap_err();
    assert!(matches!(err, AuditError::InsufficientData { required: 3, actual: 2 }));
}
