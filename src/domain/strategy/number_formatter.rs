//! Number Formatter - Abbreviated magnitudes for metric display.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Suffixes indexed by the number of thousands divisions applied.
pub const MAGNITUDE_SUFFIXES: [&str; 5] = ["", "k", "m", "bn", "tn"];

/// Significant figures kept before abbreviation.
pub const SIGNIFICANT_FIGURES: usize = 3;

/// Formats a raw magnitude as a short human-readable string.
///
/// # Algorithm
/// 1. Round to 3 significant figures
/// 2. Divide by 1000 while |value| >= 1000, counting divisions
/// 3. Render with thousands separators and 2 decimals
/// 4. Strip trailing zeros, then a trailing decimal point
/// 5. Append the suffix for the division count
///
/// # Edge Cases
/// - Zero: Returns "0"
/// - Negative values: Sign is preserved ("-2.5k")
/// - Beyond trillions: Fails with `MagnitudeOutOfRange`
/// - NaN or infinity: Fails with `NonFiniteValue`
pub fn format_abbreviated(value: f64) -> Result<String, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::new(
            ErrorCode::NonFiniteValue,
            "Cannot abbreviate a non-finite value",
        )
        .with_detail("value", value.to_string()));
    }

    let mut reduced = round_significant(value, SIGNIFICANT_FIGURES);
    let mut magnitude = 0usize;
    while reduced.abs() >= 1000.0 {
        magnitude += 1;
        reduced /= 1000.0;
    }

    let suffix = MAGNITUDE_SUFFIXES.get(magnitude).ok_or_else(|| {
        DomainError::new(
            ErrorCode::MagnitudeOutOfRange,
            format!(
                "Value {} exceeds the largest supported suffix '{}'",
                value,
                MAGNITUDE_SUFFIXES[MAGNITUDE_SUFFIXES.len() - 1]
            ),
        )
        .with_detail("magnitude", magnitude.to_string())
    })?;

    let fixed = group_thousands(&format!("{:.2}", reduced));
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    Ok(format!("{}{}", trimmed, suffix))
}

/// Formats a fraction as a percentage with one decimal place.
///
/// `0.03` becomes `"3.0%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Rounds to the given number of significant figures.
fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || digits == 0 {
        return value;
    }
    // Scientific formatting rounds on the exact binary value.
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Inserts comma separators into the integer part of a fixed-point string.
fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_without_decimals() {
        assert_eq!(format_abbreviated(0.0).unwrap(), "0");
    }

    #[test]
    fn formats_thousands_with_k() {
        assert_eq!(format_abbreviated(1500.0).unwrap(), "1.5k");
        assert_eq!(format_abbreviated(1234.0).unwrap(), "1.23k");
        assert_eq!(format_abbreviated(1000.0).unwrap(), "1k");
    }

    #[test]
    fn preserves_negative_sign() {
        assert_eq!(format_abbreviated(-2500.0).unwrap(), "-2.5k");
        assert_eq!(format_abbreviated(-12.0).unwrap(), "-12");
    }

    #[test]
    fn small_values_have_no_suffix() {
        assert_eq!(format_abbreviated(999.0).unwrap(), "999");
        assert_eq!(format_abbreviated(12.345).unwrap(), "12.3");
        assert_eq!(format_abbreviated(0.5).unwrap(), "0.5");
    }

    #[test]
    fn rounding_can_promote_to_next_suffix() {
        assert_eq!(format_abbreviated(999_999.0).unwrap(), "1m");
    }

    #[test]
    fn formats_billions_and_trillions() {
        assert_eq!(format_abbreviated(8.4e10).unwrap(), "84bn");
        assert_eq!(format_abbreviated(2.8e12).unwrap(), "2.8tn");
        assert_eq!(format_abbreviated(4.2e6).unwrap(), "4.2m");
    }

    #[test]
    fn beyond_trillions_fails_loudly() {
        let err = format_abbreviated(1.0e15).unwrap_err();
        assert_eq!(err.code, ErrorCode::MagnitudeOutOfRange);
        assert_eq!(err.details.get("magnitude"), Some(&"5".to_string()));
    }

    #[test]
    fn largest_trillions_still_format() {
        assert_eq!(format_abbreviated(999.0e12).unwrap(), "999tn");
    }

    #[test]
    fn non_finite_fails() {
        assert_eq!(
            format_abbreviated(f64::NAN).unwrap_err().code,
            ErrorCode::NonFiniteValue
        );
        assert_eq!(
            format_abbreviated(f64::INFINITY).unwrap_err().code,
            ErrorCode::NonFiniteValue
        );
    }

    #[test]
    fn group_thousands_inserts_commas() {
        assert_eq!(group_thousands("1234567.50"), "1,234,567.50");
        assert_eq!(group_thousands("-1234.00"), "-1,234.00");
        assert_eq!(group_thousands("999.99"), "999.99");
        assert_eq!(group_thousands("100"), "100");
    }

    #[test]
    fn round_significant_keeps_three_figures() {
        assert_eq!(round_significant(123_456.0, 3), 123_000.0);
        assert_eq!(round_significant(0.012345, 3), 0.0123);
    }

    #[test]
    fn format_percent_uses_one_decimal() {
        assert_eq!(format_percent(0.03), "3.0%");
        assert_eq!(format_percent(0.125), "12.5%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
