//! Display rendering.
//!
//! Turns a [`CalculatorState`] into the two lines of text the widget shows.
//! Pure functions, no I/O.

use retrocalc_core::CalculatorState;

/// Shown on the current line while the error marker is set.
pub const ERROR_LABEL: &str = "ERROR";

/// Shown on the current line while the startup banner is active.
pub const STARTUP_LABEL: &str = "- READY -";

/// Shown on the current line when nothing has been entered.
const EMPTY_LABEL: &str = "0";

/// The two display lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayText {
    /// Current operand line.
    pub current: String,
    /// Previous operand and pending operator. Empty if none pending.
    pub previous: String,
}

/// Render calculator state to display text.
pub fn render(state: &CalculatorState) -> DisplayText {
    let current = if state.is_error() {
        ERROR_LABEL.to_string()
    } else if state.current_operand().is_empty() {
        EMPTY_LABEL.to_string()
    } else {
        format_operand(state.current_operand())
    };

    let previous = state.operation().map_or_else(String::new, |op| {
        format!("{} {}", format_operand(state.previous_operand()), op.symbol())
    });

    DisplayText { current, previous }
}

/// Format an operand for display.
///
/// The integer part is grouped with `,` every three digits and loses its
/// leading zeros; the fractional part, including a trailing `.`, is kept
/// verbatim. An empty integer part (`.5`) stays empty.
pub fn format_operand(operand: &str) -> String {
    let (sign, unsigned) = match operand.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", operand),
    };

    match unsigned.split_once('.') {
        Some((integer, fraction)) => format!("{sign}{}.{fraction}", group_thousands(integer)),
        None => format!("{sign}{}", group_thousands(unsigned)),
    }
}

fn group_thousands(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    let len = significant.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in significant.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
