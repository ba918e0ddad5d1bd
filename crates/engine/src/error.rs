//! Errors produced by the engine.
//!
//! Two families live here and they are handled very differently:
//!
//! - [`ValidationError`] is user-input feedback. It is never propagated as a
//!   fault: the session stores it in its error list and the UI prints it.
//! - [`FormError`] is a broken caller contract (bad index, wrong value kind,
//!   transition from the wrong mode). Hosts receive it as an `Err`.
//!
//! [`AmountError`] covers parsing of user-typed amounts.
use thiserror::Error;

use crate::{EntryField, ViewMode};

/// One violated rule for one entry. `index` is 0-based; messages use 1-based
/// line numbers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("start date of line {} is empty.", .index + 1)]
    MissingStartDate { index: usize },
    #[error("end date of line {} is empty.", .index + 1)]
    MissingEndDate { index: usize },
    #[error("start date of line {} cannot be later than the end date.", .index + 1)]
    InvalidDateRange { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("entry index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("value does not match the type of field {field}")]
    FieldTypeMismatch { field: EntryField },
    #[error("the last entry cannot be removed")]
    LastEntry,
    #[error("entries can only be changed while editing")]
    NotEditing,
    #[error("\"{action}\" is not available in {mode} mode")]
    InvalidTransition { action: &'static str, mode: ViewMode },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount")]
    Invalid,
    #[error("too many decimals")]
    TooManyDecimals,
    #[error("amount too large")]
    Overflow,
}
