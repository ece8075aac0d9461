//! Display formatting.
//!
//! Pure functions converting numbers, dates and strings into the display
//! strings the UI and rendered documents show. Currency follows the Indian
//! numbering convention (`₹12,34,567.89`): the last three integer digits
//! group together, everything above groups in twos.

use chrono::{DateTime, NaiveDate, Utc};

use ledgercraft_core::round_half_up;

/// Format a monetary amount as rupees: `₹` + Indian digit grouping + exactly
/// two decimals, rounded half-up. Negative amounts carry a leading `-`.
pub fn format_currency(amount: f64) -> String {
    let amount = round_half_up(amount);
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u128;
    let rupees = cents / 100;
    let paise = cents % 100;

    let grouped = group_indian(&rupees.to_string());
    let sign = if negative { "-" } else { "" };
    format!("{sign}\u{20B9}{grouped}.{paise:02}")
}

/// Format a rate as a percentage, trimming trailing zeros: `18%`, `12.5%`.
pub fn format_percentage(rate: f64) -> String {
    let mut s = format!("{:.2}", round_half_up(rate));
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    format!("{s}%")
}

/// Format a byte count with 1024-based units and one decimal: `1.5 MB`.
/// Whole numbers drop the decimal (`512 B`, `2 GB`).
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[unit])
    } else {
        format!("{rounded:.1} {}", UNITS[unit])
    }
}

/// Format a phone number for display. Ten-digit numbers group `XXXXX XXXXX`;
/// twelve digits starting with the Indian country code render as
/// `+91 XXXXX XXXXX`. Anything else passes through untouched.
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => format!("{} {}", &digits[..5], &digits[5..]),
        12 if digits.starts_with("91") => format!("+91 {} {}", &digits[2..7], &digits[7..]),
        _ => input.to_string(),
    }
}

/// Format a civil date as `07 Aug 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Format a UTC timestamp as `07 Aug 2026, 14:05`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%d %b %Y, %H:%M").to_string()
}

/// Group an unsigned integer string the Indian way: `1234567` -> `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_indian_grouping() {
        assert_eq!(format_currency(1234567.89), "\u{20B9}12,34,567.89");
        assert_eq!(format_currency(1000.0), "\u{20B9}1,000.00");
        assert_eq!(format_currency(100.0), "\u{20B9}100.00");
        assert_eq!(format_currency(0.0), "\u{20B9}0.00");
    }

    #[test]
    fn currency_rounds_half_up() {
        assert_eq!(format_currency(1180.005_000_1), "\u{20B9}1,180.01");
        assert_eq!(format_currency(99.994), "\u{20B9}99.99");
    }

    #[test]
    fn negative_currency_keeps_the_sign_out_front() {
        assert_eq!(format_currency(-1500.5), "-\u{20B9}1,500.50");
    }

    #[test]
    fn percentage_trims_trailing_zeros() {
        assert_eq!(format_percentage(18.0), "18%");
        assert_eq!(format_percentage(12.5), "12.5%");
        assert_eq!(format_percentage(9.25), "9.25%");
        assert_eq!(format_percentage(0.0), "0%");
    }

    #[test]
    fn file_sizes_scale_through_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn phone_grouping() {
        assert_eq!(format_phone("9876543210"), "98765 43210");
        assert_eq!(format_phone("+91 9876543210"), "+91 98765 43210");
        assert_eq!(format_phone("919876543210"), "+91 98765 43210");
        // Unrecognized shapes pass through.
        assert_eq!(format_phone("1234"), "1234");
    }

    #[test]
    fn dates_render_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(format_date(date), "07 Aug 2026");
    }

    #[test]
    fn timestamps_include_time() {
        let at = DateTime::parse_from_rfc3339("2026-08-07T14:05:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(at), "07 Aug 2026, 14:05");
    }
}
