use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date given as `YYYY-MM-DD` or `D.M.YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let day = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let year = parts[2].parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Build a date from separate components, rejecting impossible combinations.
pub fn from_dmy(day: u32, month: u32, year: i32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::InvalidDate(format!("{day}.{month}.{year}")))
}

/// Signed number of calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Same day and month as `date`, moved to `year`.
/// 29 February falls back to 28 February in non-leap years.
pub fn anniversary(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
        .unwrap_or(date)
}

/// `D.M.YYYY`, the form shown in the detail view.
pub fn format_dmy(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_both_input_forms() {
        assert_eq!(parse_date("2024-06-15"), Some(d(2024, 6, 15)));
        assert_eq!(parse_date("15.6.2024"), Some(d(2024, 6, 15)));
        assert_eq!(parse_date("05.06.2024"), Some(d(2024, 6, 5)));
        assert_eq!(parse_date("31.2.2024"), None);
        assert_eq!(parse_date("2024/06/15"), None);
        assert_eq!(parse_date("x.6.2024"), None);
    }

    #[test]
    fn from_dmy_validates_day_of_month() {
        assert_eq!(from_dmy(29, 2, 2024).unwrap(), d(2024, 2, 29));
        assert!(matches!(from_dmy(29, 2, 2023), Err(AppError::InvalidDate(_))));
        assert!(from_dmy(0, 1, 2023).is_err());
        assert!(from_dmy(1, 13, 2023).is_err());
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(d(2024, 6, 15), d(2024, 6, 20)), 5);
        assert_eq!(days_between(d(2024, 6, 15), d(2024, 6, 12)), -3);
        assert_eq!(days_between(d(2024, 6, 15), d(2024, 6, 15)), 0);
        assert_eq!(days_between(d(2023, 1, 1), d(2024, 1, 1)), 365);
    }

    #[test]
    fn leap_day_anniversary_falls_back() {
        assert_eq!(anniversary(d(2000, 2, 29), 2023), d(2023, 2, 28));
        assert_eq!(anniversary(d(2000, 2, 29), 2024), d(2024, 2, 29));
        assert_eq!(anniversary(d(1990, 12, 31), 2024), d(2024, 12, 31));
    }

    #[test]
    fn formats_day_month_year() {
        assert_eq!(format_dmy(d(2024, 6, 5)), "5.6.2024");
    }
}
