//! Number formatting helpers for table cells.

/// Formats a number with a thousands separator (space) and the given number
/// of decimal places.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a space every 3 digits from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Money value: 2 decimal places plus thousands separator.
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Integer with thousands separator.
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Parses user numeric input for editable cells.
///
/// Negative and non-finite values collapse to 0 so downstream arithmetic
/// stays finite (`"1e400"` parses to infinity and must not get through).
pub fn parse_non_negative(input: &str) -> f64 {
    input
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
    }

    #[test]
    fn test_parse_non_negative_rejects_bad_input() {
        assert_eq!(parse_non_negative("4500.5"), 4500.5);
        assert_eq!(parse_non_negative("-7"), 0.0);
        assert_eq!(parse_non_negative("1e400"), 0.0);
        assert_eq!(parse_non_negative("NaN"), 0.0);
        assert_eq!(parse_non_negative("abc"), 0.0);
        assert_eq!(parse_non_negative(""), 0.0);
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1 234");
    }
}
