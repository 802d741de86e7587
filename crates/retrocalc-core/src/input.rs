//! Toolkit-agnostic calculator input.

use std::fmt;

use crate::Operator;

/// One calculator input, independent of the device it came from.
///
/// Keyboard keys and pointer activation of keypad buttons both reduce to
/// this type before they reach the [`crate::Calculator`], so the state
/// machine can be driven headlessly in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Digit `0-9` or decimal point `.`.
    Digit(char),
    /// Binary operator.
    Operator(Operator),
    /// Compute the pending operation (`=`).
    Equals,
    /// Reset everything (`AC`).
    Clear,
    /// Remove the last character (`DEL`).
    Delete,
}

impl Input {
    /// Label shown on the keypad button for this input.
    pub fn label(self) -> String {
        match self {
            Self::Digit(c) => c.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }

    /// Returns true if `c` is accepted by [`Input::Digit`].
    pub fn is_digit_token(c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
