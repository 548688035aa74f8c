//! Utilities for date formatting
//!
//! Record dates are stored as ISO strings ("2024-03-15"); cards and
//! exports show them in a human readable form.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format ISO date string to "Mon D, YYYY"
/// Example: "2024-03-15" -> "Mar 15, 2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            let month_idx = month.parse::<usize>().ok().filter(|m| (1..=12).contains(m));
            let day_num = day.parse::<u32>().ok();
            if let (Some(m), Some(d)) = (month_idx, day_num) {
                return format!("{} {}, {}", MONTHS[m - 1], d, year);
            }
        }
    }
    date_str.to_string()
}

/// Format a start/end pair to a single range label
/// Example: "Jan 15, 2024 - Dec 31, 2026"
pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_date("2026-12-31"), "Dec 31, 2026");
        assert_eq!(format_date("2024-03-05T14:02:26Z"), "Mar 5, 2024");
    }

    #[test]
    fn test_format_date_range() {
        assert_eq!(
            format_date_range("2024-01-15", "2026-12-31"),
            "Jan 15, 2024 - Dec 31, 2026"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2024-13-40"), "2024-13-40");
        assert_eq!(format_date(""), "");
    }
}
