//! Best-effort date normalization.

use chrono::{NaiveDate, NaiveDateTime};

/// Date layouts accepted, tried in order. Month-first beats day-first for
/// ambiguous slash dates; day-first only applies when month-first cannot
/// parse (e.g. "25/12/1990").
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%m/%d/%y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Normalize a raw date value to ISO `YYYY-MM-DD`.
///
/// Normalization never blocks a row: unparseable text comes back
/// unchanged.
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return datetime.date().format("%Y-%m-%d").to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_pass_through() {
        assert_eq!(normalize_date("1990-05-14"), "1990-05-14");
    }

    #[test]
    fn common_layouts_normalize() {
        assert_eq!(normalize_date("5/14/1990"), "1990-05-14");
        assert_eq!(normalize_date("25/12/1990"), "1990-12-25");
        assert_eq!(normalize_date("14-May-1990"), "1990-05-14");
        assert_eq!(normalize_date("May 14, 1990"), "1990-05-14");
        assert_eq!(normalize_date("1990/05/14"), "1990-05-14");
        assert_eq!(normalize_date("1990-05-14 00:00:00"), "1990-05-14");
    }

    #[test]
    fn unparseable_text_is_returned_verbatim() {
        assert_eq!(normalize_date("not a date"), "not a date");
        assert_eq!(normalize_date("  not a date  "), "not a date");
        assert_eq!(normalize_date(""), "");
    }
}
