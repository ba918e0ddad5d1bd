//! Core of Periodo: a list of dated entries, its validation rules and the
//! editing/summary state machine.
//!
//! The crate has no I/O. A host owns one [`Session`], feeds it [`Command`]s and
//! renders from its accessors after every change.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use engine::{EntryField, FieldValue, Session, ViewMode};
//!
//! let mut session = Session::new();
//! assert_eq!(session.submit().unwrap(), ViewMode::Editing);
//! assert_eq!(session.error_messages()[0], "start date of line 1 is empty.");
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! for field in [EntryField::StartDate, EntryField::EndDate] {
//!     session.update_field(0, field, FieldValue::Date(Some(day))).unwrap();
//! }
//! assert_eq!(session.submit().unwrap(), ViewMode::Summary);
//! ```

pub use amount::Amount;
pub use entry::{Entry, EntryField, FieldValue, ValueType};
pub use error::{AmountError, FormError, ValidationError};
pub use form::FormState;
pub use session::{Command, Outcome, Session, ViewMode};
pub use summary::{
    DEFAULT_DATE_FORMAT, Submission, SummaryRow, format_amount, format_date,
    is_valid_date_format,
};
pub use validation::{is_valid, validate};

mod amount;
mod entry;
mod error;
mod form;
mod session;
mod summary;
mod validation;

type ResultEngine<T> = Result<T, FormError>;
