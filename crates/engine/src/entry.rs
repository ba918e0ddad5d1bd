//! The `Entry` type: one row of the form, a date range plus a typed amount.
//!
//! Rows have no identity of their own. Their position in the
//! [`FormState`](crate::FormState) is the only key, which holds because rows
//! are never reordered.
use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Amount;

/// How the amount of an entry is to be read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    Fixed,
    Percentage,
}

impl ValueType {
    /// Human label used in tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Percentage => "Percentage",
        }
    }

    /// The other variant; used by toggling inputs.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Fixed => Self::Percentage,
            Self::Percentage => Self::Fixed,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub value_type: ValueType,
    pub amount: Amount,
}

impl Entry {
    /// Entry with both dates set, mostly useful to seed tests and demos.
    #[must_use]
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        value_type: ValueType,
        amount: Amount,
    ) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            value_type,
            amount,
        }
    }

    /// Current value of `field`, wrapped so it can be compared with or fed
    /// back into [`Entry::set`].
    #[must_use]
    pub fn field(&self, field: EntryField) -> FieldValue {
        match field {
            EntryField::StartDate => FieldValue::Date(self.start_date),
            EntryField::EndDate => FieldValue::Date(self.end_date),
            EntryField::ValueType => FieldValue::ValueType(self.value_type),
            EntryField::Amount => FieldValue::Amount(self.amount),
        }
    }

    /// Replaces `field` with `value`. Returns `false` (and leaves the entry
    /// untouched) when the value kind does not fit the field.
    pub fn set(&mut self, field: EntryField, value: FieldValue) -> bool {
        match (field, value) {
            (EntryField::StartDate, FieldValue::Date(date)) => self.start_date = date,
            (EntryField::EndDate, FieldValue::Date(date)) => self.end_date = date,
            (EntryField::ValueType, FieldValue::ValueType(kind)) => self.value_type = kind,
            (EntryField::Amount, FieldValue::Amount(amount)) => self.amount = amount,
            _ => return false,
        }
        true
    }
}

/// Names one of the four fields of an [`Entry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryField {
    StartDate,
    EndDate,
    ValueType,
    Amount,
}

impl EntryField {
    /// Fields in column order.
    pub const ALL: [EntryField; 4] = [
        EntryField::StartDate,
        EntryField::EndDate,
        EntryField::ValueType,
        EntryField::Amount,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartDate => "Start date",
            Self::EndDate => "End date",
            Self::ValueType => "Value type",
            Self::Amount => "Amount",
        }
    }

    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::StartDate | Self::EndDate)
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed value for one field. `Date(None)` is the "empty" date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Date(Option<NaiveDate>),
    ValueType(ValueType),
    Amount(Amount),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_entry_is_empty_fixed_zero() {
        let entry = Entry::default();
        assert_eq!(entry.start_date, None);
        assert_eq!(entry.end_date, None);
        assert_eq!(entry.value_type, ValueType::Fixed);
        assert_eq!(entry.amount, Amount::ZERO);
    }

    #[test]
    fn set_rejects_mismatched_kind() {
        let mut entry = Entry::default();
        assert!(!entry.set(EntryField::Amount, FieldValue::Date(Some(date(2024, 1, 1)))));
        assert!(!entry.set(EntryField::StartDate, FieldValue::Amount(Amount::ZERO)));
        assert_eq!(entry, Entry::default());
    }

    #[test]
    fn set_then_field_returns_value() {
        let mut entry = Entry::default();
        for (field, value) in [
            (EntryField::StartDate, FieldValue::Date(Some(date(2024, 1, 1)))),
            (EntryField::EndDate, FieldValue::Date(Some(date(2024, 1, 31)))),
            (EntryField::ValueType, FieldValue::ValueType(ValueType::Percentage)),
            (EntryField::Amount, FieldValue::Amount(Amount::from_hundredths(1000))),
        ] {
            assert!(entry.set(field, value));
            assert_eq!(entry.field(field), value);
        }
    }

    #[test]
    fn value_type_serializes_lowercase() {
        let json = serde_json::to_string(&ValueType::Percentage).unwrap();
        assert_eq!(json, "\"percentage\"");
    }
}
