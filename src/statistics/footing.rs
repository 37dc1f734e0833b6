//! Footing and agreement checks.
//!
//! "Footing" is the audit term for summing a column; "agreeing" compares
//! that sum to the client's reported total.

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};
use crate::table::DataTable;

/// Result of footing a column and agreeing it to an expected total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootingResult {
    /// Computed column total.
    pub total: f64,
    /// The client's reported total.
    pub expected_total: f64,
    /// `total - expected_total`.
    pub difference: f64,
    /// Tolerance the agreement was judged under.
    pub tolerance: f64,
    /// Whether the totals agree within tolerance.
    pub agrees: bool,
}

/// Sum a column over all rows. Missing cells contribute zero.
///
/// # Errors
///
/// `ColumnNotFound` for an unknown column, `EmptyInput` for a zero-row
/// table.
pub fn foot(table: &DataTable, column: &str) -> Result<f64> {
    let cells = table.column(column)?;
    if cells.is_empty() {
        return Err(AuditError::EmptyInput("table has no rows"));
    }
    Ok(cells.iter().map(|c| c.unwrap_or(0.0)).sum())
}

/// Foot a column and agree it to the client's reported total.
///
/// `agrees` is true when `|total - expected_total| <= tolerance`. A zero
/// tolerance demands exact agreement.
///
/// ```
/// use audit_analytics::{foot_and_agree, DataTable};
///
/// let table = DataTable::new()
///     .with_column("amount", vec![100.0, 200.0, 300.0])
///     .unwrap();
/// let result = foot_and_agree(&table, "amount", 600.0, 0.0).unwrap();
/// assert!(result.agrees);
/// ```
///
/// # Errors
///
/// `ColumnNotFound` for an unknown column, `EmptyInput` for a zero-row
/// table, `InvalidParameter` for a negative or non-finite tolerance or a
/// non-finite expected total.
pub fn foot_and_agree(
    table: &DataTable,
    column: &str,
    expected_total: f64,
    tolerance: f64,
) -> Result<FootingResult> {
    if !expected_total.is_finite() {
        return Err(AuditError::invalid(
            "expected_total",
            expected_total,
            "must be a finite number",
        ));
    }
    crate::validate::ensure_non_negative("tolerance", tolerance)?;

    let total = foot(table, column)?;
    let difference = total - expected_total;

    Ok(FootingResult {
        total,
        expected_total,
        difference,
        tolerance,
        agrees: difference.abs() <= tolerance,
    })
}
