//! Keyboard stand-in for a date picker: typed text in the configured format,
//! or day-by-day stepping. Either way the result is a date or "no date".

use chrono::{NaiveDate, TimeDelta};

/// Accepted in addition to the configured format.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parses typed text. Blank input clears the date.
pub fn parse_date(input: &str, date_format: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, date_format)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, ISO_FORMAT))
        .map(Some)
        .map_err(|_| format!("\"{trimmed}\" is not a date"))
}

/// Moves `current` by `days`. An empty date starts from `today`; a result
/// outside chrono's range leaves the date unchanged.
pub fn step(current: Option<NaiveDate>, days: i64, today: NaiveDate) -> Option<NaiveDate> {
    let Some(date) = current else {
        return Some(today);
    };
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .or(Some(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_configured_and_iso_formats() {
        assert_eq!(parse_date("10/01/2024", "%d/%m/%Y"), Ok(Some(date(2024, 1, 10))));
        assert_eq!(parse_date(" 2024-01-10 ", "%d/%m/%Y"), Ok(Some(date(2024, 1, 10))));
        assert_eq!(parse_date("", "%d/%m/%Y"), Ok(None));
        assert!(parse_date("31/02/2024", "%d/%m/%Y").is_err());
        assert!(parse_date("soon", "%d/%m/%Y").is_err());
    }

    #[test]
    fn step_starts_from_today_when_empty() {
        let today = date(2024, 6, 15);
        assert_eq!(step(None, 1, today), Some(today));
        assert_eq!(step(Some(date(2024, 2, 28)), 1, today), Some(date(2024, 2, 29)));
        assert_eq!(step(Some(date(2024, 3, 1)), -1, today), Some(date(2024, 2, 29)));
        assert_eq!(step(Some(NaiveDate::MAX), 1, today), Some(NaiveDate::MAX));
    }
}
