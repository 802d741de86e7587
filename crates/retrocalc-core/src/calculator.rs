//! Arithmetic state machine.
//!
//! The [`Calculator`] owns a single [`CalculatorState`] and mutates it in
//! response to inputs. It is synchronous and knows nothing about devices or
//! rendering: every mutator returns a [`Transition`] describing what happened
//! and the caller decides how to present it.
//!
//! # States
//!
//! Informally the machine moves between `Empty`, `EnteringFirstOperand`,
//! `OperatorChosen`, `EnteringSecondOperand`, `Result` and `Error`. These are
//! not stored explicitly; they follow from which fields are populated.
//!
//! # Chaining
//!
//! Choosing an operator while another is pending collapses the pending pair
//! first, so `2 + 3 × 4 =` evaluates left to right as `(2 + 3) × 4 = 20`.

use crate::{ComputeError, Input, Operator, number};

/// Outcome of a single state machine step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// The state changed.
    Applied,
    /// The input had no effect.
    Ignored,
    /// The state was reset to empty.
    Cleared,
    /// A computation failed and the error marker is now set.
    Failed(ComputeError),
}

/// Calculator state.
///
/// # Invariants
///
/// - `operation` is `Some` iff `previous_operand` is non-empty.
/// - `current_operand` never contains more than one `.`.
/// - While `error` is `Some`, both operands are empty and `operation` is
///   `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operator>,
    should_reset_display: bool,
    error: Option<ComputeError>,
}

impl CalculatorState {
    /// Operand being typed or the last result. Empty if nothing was entered
    /// or the error marker is set.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// Left-hand operand of the pending operation. Empty if none pending.
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// Pending operator.
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// True right after a computation; the next digit starts a new operand.
    pub fn should_reset_display(&self) -> bool {
        self.should_reset_display
    }

    /// Cause of the current error marker. `None` outside the error state.
    pub fn error(&self) -> Option<&ComputeError> {
        self.error.as_ref()
    }

    /// Returns true if the current operand holds the error marker.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Four-function calculator driving a [`CalculatorState`].
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Create a calculator with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Route a device-independent input to the matching operation.
    pub fn apply(&mut self, input: Input) -> Transition {
        match input {
            Input::Digit(token) => self.append_digit(token),
            Input::Operator(op) => self.choose_operation(op),
            Input::Equals => self.compute(),
            Input::Clear => self.clear(),
            Input::Delete => self.delete_last(),
        }
    }

    /// Append a digit or decimal point to the current operand.
    ///
    /// Starts a fresh operand after a result and implicitly clears the error
    /// marker. A second `.` and tokens other than `0-9`/`.` are ignored.
    pub fn append_digit(&mut self, token: char) -> Transition {
        if !Input::is_digit_token(token) {
            return Transition::Ignored;
        }

        if self.state.should_reset_display {
            self.state.current_operand.clear();
            self.state.should_reset_display = false;
        }

        if self.state.is_error() {
            self.clear();
        }

        if token == '.' && self.state.current_operand.contains('.') {
            return Transition::Ignored;
        }

        self.state.current_operand.push(token);
        Transition::Applied
    }

    /// Choose the operator for the next computation.
    ///
    /// A pending operation is computed first. With no current operand this is
    /// a no-op, which also means a second operator pressed in a row does not
    /// replace the first one.
    pub fn choose_operation(&mut self, op: Operator) -> Transition {
        if self.state.is_error() {
            return self.clear();
        }

        if self.state.current_operand.is_empty() {
            return Transition::Ignored;
        }

        if !self.state.previous_operand.is_empty()
            && let Transition::Failed(err) = self.compute()
        {
            return Transition::Failed(err);
        }

        self.state.operation = Some(op);
        self.state.previous_operand = std::mem::take(&mut self.state.current_operand);
        Transition::Applied
    }

    /// Compute the pending operation.
    ///
    /// Silently ignored if either operand does not parse or no operator is
    /// pending. On success the result replaces the current operand, rounded
    /// to eight decimal places.
    pub fn compute(&mut self) -> Transition {
        let (Some(lhs), Some(rhs)) = (
            number::parse_operand(&self.state.previous_operand),
            number::parse_operand(&self.state.current_operand),
        ) else {
            return Transition::Ignored;
        };

        let Some(op) = self.state.operation else {
            return Transition::Ignored;
        };

        match op.apply(lhs, rhs) {
            Ok(value) => {
                let result = number::canonical(number::round_result(value));
                tracing::debug!(%lhs, %op, %rhs, %result, "computed");

                self.state.current_operand = result;
                self.state.operation = None;
                self.state.previous_operand.clear();
                self.state.should_reset_display = true;
                Transition::Applied
            },
            Err(err) => self.handle_error(err),
        }
    }

    /// Remove the last character of the current operand.
    ///
    /// Clears everything if the error marker is set.
    pub fn delete_last(&mut self) -> Transition {
        if self.state.is_error() {
            return self.clear();
        }

        match self.state.current_operand.pop() {
            Some(_) => Transition::Applied,
            None => Transition::Ignored,
        }
    }

    /// Reset all state.
    pub fn clear(&mut self) -> Transition {
        self.state = CalculatorState::default();
        Transition::Cleared
    }

    fn handle_error(&mut self, err: ComputeError) -> Transition {
        tracing::error!(kind = err.kind(), error = %err, "Calculator error");

        self.state = CalculatorState { error: Some(err), ..CalculatorState::default() };
        Transition::Failed(err)
    }
}
