//! Form state management and the submission record

use super::field::FieldId;
use serde::Serialize;

/// The record collected by the form and posted to the endpoint.
///
/// Field edits never mutate in place: `with_field` returns a new record with
/// exactly one field replaced, so a snapshot handed to the submission handler
/// is immune to later keystrokes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub address: String,
}

impl FormData {
    /// Copy of this record with the given field replaced
    pub fn with_field(&self, field: FieldId, value: String) -> Self {
        match field {
            FieldId::Name => Self {
                name: value,
                address: self.address.clone(),
            },
            FieldId::Address => Self {
                name: self.name.clone(),
                address: value,
            },
        }
    }

    /// Current value of the given field
    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Address => &self.address,
        }
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.address.is_empty()
    }
}

/// Index of the submit button in the focus cycle (after the two fields).
const SUBMIT_INDEX: usize = FieldId::ALL.len();

/// Editable state of the contact form: the record plus a focus cursor.
///
/// Focus cycles name -> address -> submit button and wraps. The button row is
/// part of the cycle but has no text value.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    data: FormData,
    active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current record
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Number of focus positions (fields + submit button)
    pub fn field_count(&self) -> usize {
        FieldId::ALL.len() + 1
    }

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    #[allow(dead_code)]
    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_INDEX);
    }

    /// Move focus to the next position (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    /// Move focus to the previous position (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// True when focus is on the submit button row
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_INDEX
    }

    /// The focused text field, if focus is not on the button row
    pub fn active_text_field(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        if let Some(field) = self.active_text_field() {
            let mut value = self.data.field(field).to_string();
            value.push(ch);
            self.data = self.data.with_field(field, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_text_field() {
            let mut value = self.data.field(field).to_string();
            value.pop();
            self.data = self.data.with_field(field, value);
        }
    }

    /// Reset the record to defaults, keeping the focus position
    pub fn reset(&mut self) {
        self.data = FormData::default();
    }
}
