//! Number formatting for the calculator display

/// Decimal places kept for non-integer results
const RESULT_DECIMALS: usize = 8;

/// Format an evaluation result.
///
/// Integers render without a decimal point; other values are rounded to eight
/// decimal places with trailing zeros trimmed.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 {
        return format_number(value);
    }

    let rounded = format!("{value:.prec$}", prec = RESULT_DECIMALS);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    normalize_zero(trimmed)
}

/// Format a number with its shortest round-trip representation.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid rendering negative zero
        return "0".to_string();
    }
    format!("{value}")
}

fn normalize_zero(value: &str) -> String {
    match value {
        "" | "-0" | "-" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_decimal_point() {
        assert_eq!(format_result(5.0), "5");
        assert_eq!(format_result(-12.0), "-12");
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn fractions_are_rounded_and_trimmed() {
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.0 / 3.0), "0.33333333");
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(-0.125), "-0.125");
    }

    #[test]
    fn tiny_values_round_to_zero() {
        assert_eq!(format_result(0.000_000_001), "0");
        assert_eq!(format_result(-0.000_000_001), "0");
    }

    #[test]
    fn format_number_uses_shortest_form() {
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }
}
