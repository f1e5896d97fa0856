//! Form state management for the contact form

use super::field::{FieldName, FieldValue, FieldValueError};
use std::collections::BTreeMap;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field_index(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field_index();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field_index();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Current values of every contact form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub business_email: String,
    pub company: String,
    pub job_title: String,
    pub message: String,
    pub privacy_accepted: bool,
}

impl ContactFields {
    /// Text content of a field (empty for the checkbox)
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::BusinessEmail => &self.business_email,
            FieldName::Company => &self.company,
            FieldName::JobTitle => &self.job_title,
            FieldName::Message => &self.message,
            FieldName::PrivacyAccepted => "",
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::BusinessEmail => Some(&mut self.business_email),
            FieldName::Company => Some(&mut self.company),
            FieldName::JobTitle => Some(&mut self.job_title),
            FieldName::Message => Some(&mut self.message),
            FieldName::PrivacyAccepted => None,
        }
    }

    /// Value of a field as a typed `FieldValue`
    pub fn get(&self, field: FieldName) -> FieldValue {
        if field.is_checkbox() {
            FieldValue::Checked(self.privacy_accepted)
        } else {
            FieldValue::Text(self.text(field).to_string())
        }
    }

    /// Assign a value, rejecting values of the wrong kind
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), FieldValueError> {
        if !value.fits(field) {
            return Err(FieldValueError {
                field,
                kind: value.kind(),
            });
        }
        match value {
            FieldValue::Checked(checked) => self.privacy_accepted = checked,
            FieldValue::Text(text) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
            }
        }
        Ok(())
    }
}

/// Validation messages keyed by the field they belong to.
///
/// Only fields currently failing validation have an entry. Iteration
/// follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}

/// Index of the Submit button in the focus ring
pub const SUBMIT_INDEX: usize = FieldName::ALL.len();

/// The contact form: field values, their errors and keyboard focus
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub active_field_index: usize,
}

impl ContactForm {
    /// Assign a field value and drop any stale error for it.
    ///
    /// The field is not re-validated.
    pub fn set_field(
        &mut self,
        field: FieldName,
        value: impl Into<FieldValue>,
    ) -> Result<(), FieldValueError> {
        self.fields.set(field, value.into())?;
        self.clear_error(field);
        Ok(())
    }

    /// Remove one field's error without touching values or other errors.
    /// Returns whether an error was present.
    pub fn clear_error(&mut self, field: FieldName) -> bool {
        self.errors.remove(field).is_some()
    }

    /// Replace all errors with the result of a full validation
    pub fn apply_validation(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Restore the initial empty state after a successful submission
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Field under focus, or `None` when the Submit button is focused
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_INDEX
    }

    /// Focus a specific field
    pub fn focus(&mut self, field: FieldName) {
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == field) {
            self.active_field_index = index;
        }
    }

    fn edit_active_text(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.active_field().filter(|f| !f.is_checkbox()) else {
            return;
        };
        let mut text = self.fields.text(field).to_string();
        edit(&mut text);
        if let Err(err) = self.set_field(field, text) {
            tracing::warn!("{err}");
        }
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) {
        self.edit_active_text(|text| text.push(c));
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        self.edit_active_text(|text| {
            text.pop();
        });
    }

    /// Flip the focused checkbox
    pub fn toggle_checkbox(&mut self) {
        if let Some(field) = self.active_field().filter(|f| f.is_checkbox()) {
            let checked = !self.fields.get(field).is_checked();
            if let Err(err) = self.set_field(field, checked) {
                tracing::warn!("{err}");
            }
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        SUBMIT_INDEX + 1 // seven fields plus the Submit button
    }
    fn active_field_index(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_INDEX);
    }
}
