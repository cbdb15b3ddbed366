//! Display formatting for the result view

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Format a number the way the form shows it: `150`, `12.5`, never `-0`.
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Display weight of an ingredient: `"{quantity}{unit}"`, unit defaulting to
/// grams, `N/A` when no quantity is known.
pub fn format_weight(quantity: f64, unit: &str) -> String {
    if quantity == 0.0 || !quantity.is_finite() {
        return "N/A".to_string();
    }
    let unit = if unit.is_empty() { "g" } else { unit };
    format!("{}{}", format_amount(quantity), unit)
}

/// `October 19th 2026, 3:04:05 pm`
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    let day = at.day();
    format!(
        "{} {}{} {}",
        at.format("%B"),
        day,
        ordinal_suffix(day),
        at.format("%Y, %-I:%M:%S %P")
    )
}

/// `Monday, October 19`
pub fn format_long_date(date: &NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(150.0), "150");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(-0.0), "0");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(100.0, "g"), "100g");
        assert_eq!(format_weight(1.5, "cup"), "1.5cup");
        assert_eq!(format_weight(30.0, ""), "30g");
        assert_eq!(format_weight(0.0, "g"), "N/A");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(&at(2026, 10, 19, 15, 4, 5)),
            "October 19th 2026, 3:04:05 pm"
        );
        assert_eq!(
            format_timestamp(&at(2026, 1, 1, 0, 30, 0)),
            "January 1st 2026, 12:30:00 am"
        );
        assert_eq!(
            format_timestamp(&at(2026, 3, 22, 11, 0, 9)),
            "March 22nd 2026, 11:00:09 am"
        );
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_long_date(&date), "Monday, October 19");
    }
}
