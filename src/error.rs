//! Error types for the audit toolkit.
//!
//! Every public function validates its inputs at entry and returns one of
//! these variants before any computation begins. The same invalid input
//! always fails the same way; there is no retry or recovery path.

use thiserror::Error;

/// Errors surfaced by the toolkit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuditError {
    /// A numeric parameter is outside its valid domain.
    #[error("invalid parameter `{name}`: {reason} (got {value})")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that failed validation.
        value: f64,
        /// Why the value is out of domain.
        reason: &'static str,
    },

    /// The requested column is absent from the tabular input.
    #[error("column `{0}` not found")]
    ColumnNotFound(String),

    /// The population is too small for the requested statistical procedure.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations the procedure requires.
        required: usize,
        /// Number of observations actually supplied.
        actual: usize,
    },

    /// A zero-length population where at least one value is required.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

impl AuditError {
    /// Shorthand for [`AuditError::InvalidParameter`].
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        AuditError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_parameter() {
        let err = AuditError::invalid("confidence", 1.5, "must be strictly between 0 and 1");
        let msg = err.to_string();
        assert!(msg.contains("confidence"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn display_column_not_found() {
        let err = AuditError::ColumnNotFound("amount".to_string());
        assert_eq!(err.to_string(), "column `amount` not found");
    }
}
