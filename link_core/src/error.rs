//! Typed parameter errors.
//!
//! Every computation that divides by, logs, or root-takes an input field
//! validates it first and reports the offending field by name instead of
//! letting a `NaN`/`Inf` leak out of an otherwise total formula.

use thiserror::Error;

/// Result type for link-budget parameter validation.
pub type ParamResult<T> = Result<T, ParamError>;

/// Errors raised when an input value violates a physical precondition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    /// A field that must be strictly positive is zero, negative, or NaN.
    #[error("{field} must be strictly positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// An angular interval is empty or reversed.
    #[error("{what}: lower bound {lo} must be below upper bound {hi}")]
    EmptyInterval { what: &'static str, lo: f64, hi: f64 },
}

/// Check that `value > 0` (NaN fails), naming `field` on error.
pub fn ensure_positive(field: &'static str, value: f64) -> ParamResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParamError::NonPositive { field, value })
    }
}
