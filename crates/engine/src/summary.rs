//! Read-only projections of a form: summary table rows and the submission
//! payload handed to the host on completion.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{Amount, Entry, ValueType};

/// Date format used when the host does not configure one (`dd/mm/yyyy`).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// One formatted line of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// 1-based line number.
    pub line: usize,
    pub start_date: String,
    pub end_date: String,
    pub value_type: String,
    pub amount: String,
}

impl SummaryRow {
    pub fn from_entry(index: usize, entry: &Entry, date_format: &str) -> Self {
        Self {
            line: index + 1,
            start_date: format_date(entry.start_date, date_format),
            end_date: format_date(entry.end_date, date_format),
            value_type: entry.value_type.label().to_string(),
            amount: format_amount(entry.value_type, entry.amount),
        }
    }
}

/// Formats every entry for the summary table.
pub fn summary_rows(entries: &[Entry], date_format: &str) -> Vec<SummaryRow> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| SummaryRow::from_entry(index, entry, date_format))
        .collect()
}

/// Empty dates render as an empty cell.
pub fn format_date(date: Option<NaiveDate>, date_format: &str) -> String {
    date.map(|d| d.format(date_format).to_string())
        .unwrap_or_default()
}

/// Returns `true` when a date shown with `date_format` parses back to the same
/// day. Rejects unknown specifiers and time-of-day fields (formatting those
/// through `to_string` would panic) as well as lossy patterns like `%d/%m`.
pub fn is_valid_date_format(date_format: &str) -> bool {
    if date_format.is_empty() {
        return false;
    }
    // Day and month differ so swapped fields do not round-trip by accident.
    let Some(day) = NaiveDate::from_ymd_opt(2024, 11, 23) else {
        return false;
    };
    let mut shown = String::new();
    if write!(shown, "{}", day.format(date_format)).is_err() {
        return false;
    }
    NaiveDate::parse_from_str(&shown, date_format) == Ok(day)
}

pub fn format_amount(value_type: ValueType, amount: Amount) -> String {
    match value_type {
        ValueType::Fixed => amount.to_string(),
        ValueType::Percentage => format!("{amount}%"),
    }
}

/// Payload produced by `complete`. The core attaches no transport to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub entries: Vec<Entry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rows_format_dates_and_amounts() {
        let entries = [
            Entry::new(
                date(2024, 1, 1),
                date(2024, 1, 31),
                ValueType::Percentage,
                Amount::from_hundredths(1000),
            ),
            Entry {
                end_date: Some(date(2024, 12, 25)),
                amount: Amount::from_hundredths(12_050),
                ..Entry::default()
            },
        ];

        let rows = summary_rows(&entries, DEFAULT_DATE_FORMAT);
        assert_eq!(
            rows,
            vec![
                SummaryRow {
                    line: 1,
                    start_date: "01/01/2024".to_string(),
                    end_date: "31/01/2024".to_string(),
                    value_type: "Percentage".to_string(),
                    amount: "10.00%".to_string(),
                },
                SummaryRow {
                    line: 2,
                    start_date: String::new(),
                    end_date: "25/12/2024".to_string(),
                    value_type: "Fixed".to_string(),
                    amount: "120.50".to_string(),
                },
            ]
        );
    }

    #[test]
    fn custom_format_is_honoured() {
        assert_eq!(format_date(Some(date(2024, 3, 9)), "%Y-%m-%d"), "2024-03-09");
        assert_eq!(format_date(None, "%Y-%m-%d"), "");
    }

    #[test]
    fn date_format_check() {
        assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
        assert!(is_valid_date_format("%Y-%m-%d"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("%d/%m/%Y %H:%M"));
        assert!(!is_valid_date_format(""));
    }

    #[test]
    fn date_format_must_read_back() {
        assert!(is_valid_date_format("%d.%m.%Y"));
        assert!(is_valid_date_format("%b %d, %Y"));
        assert!(!is_valid_date_format("%d/%m"));
        assert!(!is_valid_date_format("%A"));
        assert!(!is_valid_date_format("%b %Y"));
    }

    #[test]
    fn submission_serializes_entries() {
        let submission = Submission {
            entries: vec![Entry::new(
                date(2024, 1, 1),
                date(2024, 1, 31),
                ValueType::Percentage,
                Amount::from_hundredths(1000),
            )],
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "entries": [{
                    "start_date": "2024-01-01",
                    "end_date": "2024-01-31",
                    "value_type": "percentage",
                    "amount": 1000
                }]
            })
        );
    }
}
