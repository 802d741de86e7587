//! Error types for the arithmetic state machine.
//!
//! Arithmetic faults never escape the calculator: they are absorbed into the
//! error marker and reported to the caller as a
//! [`Transition::Failed`](crate::Transition::Failed). The variants stay
//! distinct so callers can log the cause even though the user only ever sees
//! a generic error display.

use thiserror::Error;

use crate::Operator;

/// Errors that can occur while computing a pending operation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ComputeError {
    /// Right-hand operand of a division was exactly zero.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// Operation produced an infinite or NaN result
    #[error("invalid calculation: {lhs} {op} {rhs} is not finite")]
    NonFinite {
        /// Left-hand operand
        lhs: f64,
        /// Operator that was applied
        op: Operator,
        /// Right-hand operand
        rhs: f64,
    },
}

impl ComputeError {
    /// Short machine-friendly name of the cause, for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division_by_zero",
            Self::NonFinite { .. } => "non_finite",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        assert_eq!(ComputeError::DivisionByZero.to_string(), "cannot divide by zero");

        let err = ComputeError::NonFinite { lhs: 1e308, op: Operator::Multiply, rhs: 10.0 };
        assert!(err.to_string().starts_with("invalid calculation:"));
        assert!(err.to_string().contains('×'));
    }

    #[test]
    fn kinds_are_distinct() {
        let overflow = ComputeError::NonFinite { lhs: 1.0, op: Operator::Add, rhs: 1.0 };
        assert_ne!(ComputeError::DivisionByZero.kind(), overflow.kind());
    }
}
