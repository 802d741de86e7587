//! Core arithmetic for retro-calc
//!
//! A small, synchronous state machine for a four-function calculator:
//! operand entry, left-to-right operator chaining, rounded computation and an
//! error marker that absorbs arithmetic faults. No I/O and no UI dependencies,
//! so every transition can be exercised headlessly.
//!
//! # Components
//!
//! - [`Calculator`]: owns the [`CalculatorState`] and applies inputs
//! - [`Input`]: device-independent input variant
//! - [`Operator`]: the four binary operators
//! - [`ComputeError`]: division by zero and non-finite results

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod calculator;
mod error;
mod input;
pub mod number;
mod operator;

pub use calculator::{Calculator, CalculatorState, Transition};
pub use error::ComputeError;
pub use input::Input;
pub use operator::Operator;
