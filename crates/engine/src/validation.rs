//! Validation rules for a list of entries.
//!
//! Rules are checked per entry in index order, and per entry in this order:
//! missing start date, missing end date, start after end. The range rule only
//! applies when both dates are present.

use crate::{Entry, ValidationError};

/// Returns every violated rule, ordered by entry index then rule.
///
/// Pure: calling it twice on the same entries gives the same list.
pub fn validate(entries: &[Entry]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if entry.start_date.is_none() {
            errors.push(ValidationError::MissingStartDate { index });
        }
        if entry.end_date.is_none() {
            errors.push(ValidationError::MissingEndDate { index });
        }
        if let (Some(start), Some(end)) = (entry.start_date, entry.end_date)
            && start > end
        {
            errors.push(ValidationError::InvalidDateRange { index });
        }
    }

    errors
}

pub fn is_valid(entries: &[Entry]) -> bool {
    validate(entries).is_empty()
}
