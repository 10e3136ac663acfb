//! Error types for the health calculator engine

use thiserror::Error;

/// Outcome of a calculator call.
///
/// - `Ok(Some(result))`: the calculation ran
/// - `Ok(None)`: a required measurement is absent, empty or non-positive,
///   so nothing was computed (the "form incomplete" state)
/// - `Err(_)`: every field is present but the values are mathematically unusable
pub type CalcResult<T> = Result<Option<T>, CalculatorError>;

/// Errors raised when present inputs cannot produce a meaningful result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        /// Wire name of the offending field (e.g. `waistValue`)
        field: &'static str,
        reason: &'static str,
    },
}

impl CalculatorError {
    pub fn invalid(field: &'static str, reason: &'static str) -> Self {
        CalculatorError::InvalidInput { field, reason }
    }

    /// Wire name of the field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            CalculatorError::InvalidInput { field, .. } => field,
        }
    }
}

/// Reject NaN and infinities before they reach a caller
pub(crate) fn ensure_finite(value: f64, field: &'static str) -> Result<f64, CalculatorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculatorError::invalid(
            field,
            "values produce a result outside the representable range",
        ))
    }
}
