// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

pub(crate) const NAN_TEXT: &str = "Error";
pub(crate) const DIVIDE_BY_ZERO_TEXT: &str = "Cannot divide by zero";

/// Formats a computed value into the string stored as the last result.
///
/// Integral values are printed without a decimal point, with every digit
/// rather than in exponent form. Other values use the shortest decimal
/// representation that round-trips.
///
/// # Examples
///
/// ```
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::NAN), "Error");
/// ```
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        NAN_TEXT.to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        // Also catches negative zero
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Strips a trailing `".0"` for display.
///
/// Applied to both the operand line and the result line, so an entry typed
/// as `2.0` reads `2` on screen while the entry itself keeps its text.
pub(crate) fn strip_point_zero(text: &str) -> &str {
    text.strip_suffix(".0").unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_decimal_point() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractional_values_keep_their_digits() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-2.25), "-2.25");
    }

    #[test]
    fn non_finite_values_have_fixed_text() {
        assert_eq!(format_number(f64::NAN), "Error");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn strips_only_a_trailing_point_zero() {
        assert_eq!(strip_point_zero("2.0"), "2");
        assert_eq!(strip_point_zero("2.05"), "2.05");
        assert_eq!(strip_point_zero("20"), "20");
        assert_eq!(strip_point_zero("0."), "0.");
        assert_eq!(strip_point_zero(""), "");
    }
}
