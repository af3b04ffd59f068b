//! Errors produced by the math kernel.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("Dimension mismatch in {operation}: {details}")]
    DimensionMismatch {
        operation: &'static str,
        details: String,
    },

    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,

    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: &'static str },
}

impl MathError {
    pub(crate) fn dimension_mismatch(operation: &'static str, details: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            operation,
            details: details.into(),
        }
    }
}
