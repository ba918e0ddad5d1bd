//! The editing session: one form, its last validation result and the current
//! view mode, mutated only through the methods below.
//!
//! The host drives a plain "mutate, then re-render" cycle: translate an event
//! into a [`Command`], hand it to [`Session::apply`], then redraw from the
//! read accessors (`entries`, `errors`, `mode`, `summary`).
use core::fmt;

use serde::Serialize;

use crate::{
    EntryField, FieldValue, FormError, FormState, ResultEngine, Submission, SummaryRow,
    ValidationError, summary::summary_rows, validation::validate,
};

/// Whether the form is being edited or reviewed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Editing,
    Summary,
}

impl ViewMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One host event, expressed as a core operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AddEntry,
    RemoveEntry(usize),
    UpdateField {
        index: usize,
        field: EntryField,
        value: FieldValue,
    },
    Submit,
    Back,
    Complete,
}

/// What a successfully applied [`Command`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Entry count after an add or remove.
    Len(usize),
    Updated,
    /// Mode after a submit: `Summary` when the form was valid.
    Submitted(ViewMode),
    Back,
    /// Payload for the host's submission transport.
    Complete(Submission),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    form: FormState,
    errors: Vec<ValidationError>,
    mode: ViewMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session on existing rows, in editing mode.
    pub fn with_form(form: FormState) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &[crate::Entry] {
        self.form.entries()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Summary table rows with dates rendered through `date_format`.
    pub fn summary(&self, date_format: &str) -> Vec<SummaryRow> {
        summary_rows(self.form.entries(), date_format)
    }

    pub fn apply(&mut self, command: Command) -> ResultEngine<Outcome> {
        match command {
            Command::AddEntry => self.add_entry().map(Outcome::Len),
            Command::RemoveEntry(index) => self.remove_entry(index).map(Outcome::Len),
            Command::UpdateField {
                index,
                field,
                value,
            } => self
                .update_field(index, field, value)
                .map(|()| Outcome::Updated),
            Command::Submit => self.submit().map(Outcome::Submitted),
            Command::Back => self.back().map(|()| Outcome::Back),
            Command::Complete => self.complete().map(Outcome::Complete),
        }
    }

    pub fn add_entry(&mut self) -> ResultEngine<usize> {
        self.begin_mutation()?;
        let len = self.form.add();
        tracing::debug!(len, "entry added");
        Ok(len)
    }

    /// Errors are cleared even when the removal is refused.
    pub fn remove_entry(&mut self, index: usize) -> ResultEngine<usize> {
        self.begin_mutation()?;
        let len = self.form.remove(index)?;
        tracing::debug!(index, len, "entry removed");
        Ok(len)
    }

    pub fn update_field(
        &mut self,
        index: usize,
        field: EntryField,
        value: FieldValue,
    ) -> ResultEngine<()> {
        self.begin_mutation()?;
        self.form.update(index, field, value)?;
        tracing::debug!(index, %field, "entry field updated");
        Ok(())
    }

    /// Validates the form. On success the session moves to summary mode; on
    /// failure it stays in editing mode with the errors recorded.
    pub fn submit(&mut self) -> ResultEngine<ViewMode> {
        self.require_mode("submit", ViewMode::Editing)?;
        self.errors = validate(self.form.entries());
        if self.errors.is_empty() {
            self.mode = ViewMode::Summary;
            tracing::debug!(entries = self.form.len(), "form valid, showing summary");
        } else {
            tracing::debug!(errors = self.errors.len(), "form rejected");
        }
        Ok(self.mode)
    }

    /// Returns to editing. Entries and errors are kept as they are.
    pub fn back(&mut self) -> ResultEngine<()> {
        self.require_mode("back", ViewMode::Summary)?;
        self.mode = ViewMode::Editing;
        tracing::debug!("back to editing");
        Ok(())
    }

    /// Hands the reviewed entries to the caller. No transition happens here.
    pub fn complete(&self) -> ResultEngine<Submission> {
        self.require_mode("complete", ViewMode::Summary)?;
        tracing::debug!(entries = self.form.len(), "submission prepared");
        Ok(Submission {
            entries: self.form.entries().to_vec(),
        })
    }

    fn begin_mutation(&mut self) -> ResultEngine<()> {
        if self.mode != ViewMode::Editing {
            return Err(FormError::NotEditing);
        }
        self.errors.clear();
        Ok(())
    }

    fn require_mode(&self, action: &'static str, expected: ViewMode) -> ResultEngine<()> {
        if self.mode != expected {
            return Err(FormError::InvalidTransition {
                action,
                mode: self.mode,
            });
        }
        Ok(())
    }
}
