//! Minimal in-memory tabular dataset.
//!
//! The toolkit's boundary is a function-call API: an external loader parses
//! whatever file format the engagement uses and hands over a table of named
//! numeric columns. Cells are optional so missing values survive the trip
//! without sentinel encodings.

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

/// A named numeric column with optional (missing) cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    name: String,
    cells: Vec<Option<f64>>,
}

impl Column {
    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All cells in row order, missing values included.
    pub fn cells(&self) -> &[Option<f64>] {
        &self.cells
    }
}

/// An ordered collection of equal-length named columns.
///
/// Construction is by chained builder calls, failing fast on length or
/// naming conflicts:
///
/// ```
/// use audit_analytics::DataTable;
///
/// let table = DataTable::new()
///     .with_column("amount", vec![100.0, 200.0, 300.0])
///     .unwrap();
/// assert_eq!(table.row_count(), 3);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<Column>,
}

impl DataTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully-populated numeric column.
    pub fn with_column(self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.with_nullable_column(name, values.into_iter().map(Some).collect())
    }

    /// Add a column that may contain missing cells.
    pub fn with_nullable_column(
        mut self,
        name: impl Into<String>,
        cells: Vec<Option<f64>>,
    ) -> Result<Self> {
        let name = name.into();
        if self.columns.iter().any(|c| c.name == name) {
            return Err(AuditError::invalid(
                "column",
                f64::NAN,
                "a column with this name already exists",
            ));
        }
        if let Some(first) = self.columns.first() {
            if cells.len() != first.cells.len() {
                return Err(AuditError::invalid(
                    "column",
                    cells.len() as f64,
                    "column length must match the table row count",
                ));
            }
        }
        self.columns.push(Column { name, cells });
        Ok(self)
    }

    /// Number of rows (zero for a table with no columns).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Cells of the named column, missing values included.
    pub fn column(&self, name: &str) -> Result<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.cells.as_slice())
            .ok_or_else(|| AuditError::ColumnNotFound(name.to_string()))
    }

    /// Non-missing values of the named column, in row order.
    pub fn column_values(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self.column(name)?.iter().filter_map(|c| *c).collect())
    }
}
