//! Terminal-agnostic keyboard input.

use retrocalc_core::{Input, Operator};

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic simulation testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (compute).
    Enter,
    /// Backspace key (delete last character).
    Backspace,
    /// Escape key (clear).
    Esc,
    /// Character pressed together with Ctrl.
    Ctrl(char),
}

impl KeyInput {
    /// Map a key to the calculator input it stands for.
    ///
    /// Digits and `.` map directly, `+ - * /` map to `+ - × ÷`, `Enter` and
    /// `=` compute, `Esc` clears and `Backspace` deletes. Every other key
    /// yields `None`.
    pub fn to_input(self) -> Option<Input> {
        match self {
            Self::Char(c) if Input::is_digit_token(c) => Some(Input::Digit(c)),
            Self::Char('=') | Self::Enter => Some(Input::Equals),
            Self::Char(c @ ('+' | '-' | '*' | '/')) => Operator::from_symbol(c).map(Input::Operator),
            Self::Esc => Some(Input::Clear),
            Self::Backspace => Some(Input::Delete),
            Self::Char(_) | Self::Ctrl(_) => None,
        }
    }

    /// Returns true if this key asks the front end to exit.
    pub fn is_quit(self) -> bool {
        matches!(self, Self::Ctrl('c' | 'd'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_point_map_directly() {
        for c in "0123456789.".chars() {
            assert_eq!(KeyInput::Char(c).to_input(), Some(Input::Digit(c)));
        }
    }

    #[test]
    fn ascii_operators_map_to_symbols() {
        let cases = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
        ];
        for (key, op) in cases {
            assert_eq!(KeyInput::Char(key).to_input(), Some(Input::Operator(op)));
        }
    }

    #[test]
    fn control_keys() {
        assert_eq!(KeyInput::Enter.to_input(), Some(Input::Equals));
        assert_eq!(KeyInput::Char('=').to_input(), Some(Input::Equals));
        assert_eq!(KeyInput::Esc.to_input(), Some(Input::Clear));
        assert_eq!(KeyInput::Backspace.to_input(), Some(Input::Delete));
    }

    #[test]
    fn unrecognised_keys_are_ignored() {
        // The display symbols themselves are not keyboard keys
        for c in ['x', 'q', '×', '÷', ' ', '%'] {
            assert_eq!(KeyInput::Char(c).to_input(), None);
        }
        assert_eq!(KeyInput::Ctrl('c').to_input(), None);
    }

    #[test]
    fn quit_keys() {
        assert!(KeyInput::Ctrl('c').is_quit());
        assert!(KeyInput::Ctrl('d').is_quit());
        assert!(!KeyInput::Esc.is_quit());
        assert!(!KeyInput::Char('q').is_quit());
    }
}
