//! Form domain layer
//!
//! Type-safe field values, the contact form's state, and its per-field
//! error map.

mod field;
mod form_state;

pub use field::{FieldName, FieldValue};
pub use form_state::{ContactFields, ContactForm, FieldErrors, Form, SUBMIT_INDEX};
