//! Field validation rules for the contact form
//!
//! `validate` is a pure function: it reads the current field values and
//! returns the messages for every field that fails. All rules run on every
//! call. The business email checks are the one chain: required, then
//! format, then the personal-domain blacklist.

use crate::state::{ContactFields, FieldErrors, FieldName};
use regex::Regex;
use std::sync::LazyLock;

/// Free webmail providers that are not accepted as business addresses
pub const PERSONAL_EMAIL_DOMAINS: [&str; 10] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "aol.com",
    "protonmail.com",
    "zoho.com",
    "mail.com",
    "yandex.com",
];

/// Loose email shape: something, '@', something, '.', something
pub const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Business email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const EMAIL_PERSONAL: &str = "Please use a company email address, not a personal email";
pub const COMPANY_REQUIRED: &str = "Company is required";
pub const JOB_TITLE_REQUIRED: &str = "Job title is required";
pub const MESSAGE_REQUIRED: &str = "Your message to Legartis is required";
pub const PRIVACY_REQUIRED: &str = "You must accept the privacy policy";

/// Run every rule over the form and collect the failures
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let required = [
        (FieldName::FirstName, FIRST_NAME_REQUIRED),
        (FieldName::LastName, LAST_NAME_REQUIRED),
        (FieldName::Company, COMPANY_REQUIRED),
        (FieldName::JobTitle, JOB_TITLE_REQUIRED),
        (FieldName::Message, MESSAGE_REQUIRED),
    ];
    for (field, message) in required {
        if is_blank(fields.text(field)) {
            errors.insert(field, message);
        }
    }

    if let Some(message) = check_business_email(&fields.business_email) {
        errors.insert(FieldName::BusinessEmail, message);
    }

    if !fields.privacy_accepted {
        errors.insert(FieldName::PrivacyAccepted, PRIVACY_REQUIRED);
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_business_email(email: &str) -> Option<&'static str> {
    if is_blank(email) {
        return Some(EMAIL_REQUIRED);
    }
    if !is_email_shaped(email) {
        return Some(EMAIL_INVALID);
    }
    if email_domain(email).is_some_and(|domain| is_personal_domain(&domain)) {
        return Some(EMAIL_PERSONAL);
    }
    None
}

/// Whether the value matches `EMAIL_PATTERN`
pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Lowercased text between the first '@' and the next '@' (or the end)
pub fn email_domain(email: &str) -> Option<String> {
    email.split('@').nth(1).map(str::to_lowercase)
}

/// Whether a (lowercased) domain is on the personal-provider blacklist
pub fn is_personal_domain(domain: &str) -> bool {
    PERSONAL_EMAIL_DOMAINS.contains(&domain)
}
