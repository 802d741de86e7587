//! Binary operators.

use std::fmt;

use crate::ComputeError;

/// One of the four supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`×`).
    Multiply,
    /// Division (`÷`).
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Display symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parse a display symbol or its ASCII keyboard alias (`*`, `/`).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator.
    ///
    /// # Errors
    ///
    /// - [`ComputeError::DivisionByZero`] if dividing by exactly zero
    ///   (either sign).
    /// - [`ComputeError::NonFinite`] if the result overflows or is NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ComputeError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(ComputeError::DivisionByZero);
                }
                lhs / rhs
            },
        };

        if !value.is_finite() {
            return Err(ComputeError::NonFinite { lhs, op: self, rhs });
        }
        Ok(value)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
