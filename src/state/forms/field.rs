//! Form field value objects

use std::fmt;

/// Every field of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    BusinessEmail,
    Company,
    JobTitle,
    Message,
    PrivacyAccepted,
}

impl FieldName {
    /// All fields in the order they are rendered and focused
    pub const ALL: [FieldName; 7] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::BusinessEmail,
        FieldName::Company,
        FieldName::JobTitle,
        FieldName::Message,
        FieldName::PrivacyAccepted,
    ];

    /// Key used to identify the field in logs and error maps
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::BusinessEmail => "businessEmail",
            FieldName::Company => "company",
            FieldName::JobTitle => "jobTitle",
            FieldName::Message => "message",
            FieldName::PrivacyAccepted => "privacyAccepted",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First name*",
            FieldName::LastName => "Last name*",
            FieldName::BusinessEmail => "Business email*",
            FieldName::Company => "Company*",
            FieldName::JobTitle => "Job title*",
            FieldName::Message => "Your Message to Legartis*",
            FieldName::PrivacyAccepted => {
                "Legartis will use any of the data provided by you in accordance with our Privacy Policy.*"
            }
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldName::Message)
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, FieldName::PrivacyAccepted)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Name of the value kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Checked(_) => "checkbox",
        }
    }

    /// Get the checkbox value (returns false for text values)
    pub fn is_checked(&self) -> bool {
        match self {
            FieldValue::Checked(c) => *c,
            FieldValue::Text(_) => false,
        }
    }

    /// Whether this value kind fits the given field
    pub fn fits(&self, field: FieldName) -> bool {
        match self {
            FieldValue::Text(_) => !field.is_checkbox(),
            FieldValue::Checked(_) => field.is_checkbox(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}

/// Error raised when a value of the wrong kind is assigned to a field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field `{field}` does not accept a {kind} value")]
pub struct FieldValueError {
    pub field: FieldName,
    pub kind: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = FieldName::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), FieldName::ALL.len());
    }

    #[test]
    fn test_only_message_is_multiline() {
        let multiline: Vec<_> = FieldName::ALL
            .into_iter()
            .filter(|f| f.is_multiline())
            .collect();
        assert_eq!(multiline, vec![FieldName::Message]);
    }

    #[test]
    fn test_only_privacy_is_checkbox() {
        let checkboxes: Vec<_> = FieldName::ALL
            .into_iter()
            .filter(|f| f.is_checkbox())
            .collect();
        assert_eq!(checkboxes, vec![FieldName::PrivacyAccepted]);
    }

    #[test]
    fn test_value_kind_must_fit_field() {
        assert!(FieldValue::from("Ada").fits(FieldName::FirstName));
        assert!(!FieldValue::from("Ada").fits(FieldName::PrivacyAccepted));
        assert!(FieldValue::from(true).fits(FieldName::PrivacyAccepted));
        assert!(!FieldValue::from(true).fits(FieldName::Company));
    }

    #[test]
    fn test_checked_accessor_and_kind() {
        assert!(!FieldValue::Text("yes".to_string()).is_checked());
        assert_eq!(FieldValue::Checked(true).kind(), "checkbox");
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(FieldName::BusinessEmail.to_string(), "businessEmail");
    }
}
