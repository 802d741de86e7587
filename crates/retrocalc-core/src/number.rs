//! Operand parsing and result rounding.

/// Results keep eight decimal places.
const RESULT_SCALE: f64 = 100_000_000.0;

/// Largest magnitude at which an `f64` still resolves every integer (2^53).
/// Scaled values beyond it carry no fractional digits worth rounding.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parse an operand string as a decimal number.
///
/// Returns `None` for empty input and for numerals that are still incomplete,
/// such as a lone `.`.
pub fn parse_operand(operand: &str) -> Option<f64> {
    operand.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Round a finite result half-up at the eighth fraction digit.
///
/// `f64::EPSILON` is added before scaling so that values sitting just below a
/// rounding boundary because of binary representation error (`1.005`-style
/// inputs) round the way their decimal spelling suggests. Negative zero is
/// normalised to `0`.
pub fn round_result(value: f64) -> f64 {
    let scaled = (value + f64::EPSILON) * RESULT_SCALE;
    if scaled.abs() >= MAX_EXACT_INTEGER {
        return normalize_zero(value);
    }

    normalize_zero((scaled + 0.5).floor() / RESULT_SCALE)
}

/// Canonical decimal spelling of a rounded result.
///
/// Integral values have no fraction (`20`, not `20.0`) and exponent notation
/// is never used.
pub fn canonical(value: f64) -> String {
    format!("{}", normalize_zero(value))
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_numerals() {
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand("007"), Some(7.0));
        assert_eq!(parse_operand("-12.5"), Some(-12.5));
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand(""), None);
    }

    #[test]
    fn rounds_away_binary_noise() {
        assert_eq!(canonical(round_result(0.1 + 0.2)), "0.3");
        assert_eq!(canonical(round_result(-0.1 - 0.2)), "-0.3");
    }

    #[test]
    fn rounds_to_eight_places() {
        assert_eq!(canonical(round_result(2.0 / 3.0)), "0.66666667");
        assert_eq!(canonical(round_result(1.0 / 3.0)), "0.33333333");
    }

    #[test]
    fn integral_results_have_no_fraction() {
        assert_eq!(canonical(round_result(20.0)), "20");
        assert_eq!(canonical(round_result(-4.0)), "-4");
    }

    #[test]
    fn tiny_negative_rounds_to_plain_zero() {
        assert_eq!(canonical(round_result(-0.000_000_001)), "0");
        assert_eq!(canonical(-0.0), "0");
    }

    #[test]
    fn huge_values_skip_rounding() {
        let value = 1e300;
        assert_eq!(round_result(value), value);
        assert!(!canonical(value).contains('e'));
    }
}
