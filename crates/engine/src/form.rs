//! The ordered collection of entries edited in a session.

use crate::{Entry, EntryField, FieldValue, FormError, ResultEngine};

/// Ordered, index-addressed list of [`Entry`] rows.
///
/// Always holds at least one entry: [`FormState::remove`] refuses to drop the
/// last one, so callers cannot break the invariant by skipping a UI check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    entries: Vec<Entry>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// A form with a single default entry.
    pub fn new() -> Self {
        Self {
            entries: vec![Entry::default()],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` while the one-entry invariant holds.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Appends a default entry and returns the new length.
    pub fn add(&mut self) -> usize {
        self.entries.push(Entry::default());
        self.entries.len()
    }

    /// Removes the entry at `index`, shifting later entries down. Returns the
    /// new length.
    pub fn remove(&mut self, index: usize) -> ResultEngine<usize> {
        let len = self.entries.len();
        if len == 1 {
            return Err(FormError::LastEntry);
        }
        if index >= len {
            return Err(FormError::IndexOutOfRange { index, len });
        }
        self.entries.remove(index);
        Ok(self.entries.len())
    }

    pub fn update(
        &mut self,
        index: usize,
        field: EntryField,
        value: FieldValue,
    ) -> ResultEngine<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(FormError::IndexOutOfRange { index, len })?;
        if entry.set(field, value) {
            Ok(())
        } else {
            Err(FormError::FieldTypeMismatch { field })
        }
    }
}

impl From<Vec<Entry>> for FormState {
    /// Builds a form from existing rows; an empty list becomes the default
    /// single-entry form.
    fn from(entries: Vec<Entry>) -> Self {
        if entries.is_empty() {
            return Self::new();
        }
        Self { entries }
    }
}
