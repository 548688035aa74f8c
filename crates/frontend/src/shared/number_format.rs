//! Number formatting utilities for cards, tables and exports

/// Formats a number with a comma thousands separator and the given number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a comma every 3 digits, counting from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Formats a monetary amount with a currency sign and comma separators.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_money;
/// let formatted = format_money(1234567.0);
/// assert_eq!(formatted, "$1,234,567");
/// ```
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number_with_decimals(-value, 0))
    } else {
        format!("${}", format_number_with_decimals(value, 0))
    }
}

/// Formats an integer quantity with comma separators.
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
        assert_eq!(format_number_with_decimals(-1234.56, 2), "-1,234.56");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(500000.0), "$500,000");
        assert_eq!(format_money(1250000.0), "$1,250,000");
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(-1234.0), "-$1,234");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(2500.0), "2,500");
        assert_eq!(format_number_int(156.0), "156");
    }
}
