//! Declarative validation ruleset for the signup form
//!
//! Rules are pure: each one looks only at the current [`FormValues`] and
//! there are no cross-field constraints, so a single field can be checked
//! on change/blur and the whole set on submit.

use crate::state::{FieldName, FormValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

pub const FIRST_NAME_MAX_LEN: usize = 15;
pub const LAST_NAME_MAX_LEN: usize = 20;

/// Local part, `@`, dot-separated domain labels, alphabetic TLD of two or more letters.
/// Letters are ASCII only. Leading dots and `..` are rejected separately since
/// `regex` has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// A field value that does not satisfy its rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required")]
    Required,
    #[error("{label} must be less than {max} characters")]
    TooLong { label: &'static str, max: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select a job type")]
    MissingJobType,
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
}

/// Current error per field; absent fields are valid
pub type FieldErrors = BTreeMap<FieldName, ValidationError>;

/// Static per-field constraints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationRules {
    /// Also require the terms checkbox to be checked, not just present
    pub require_terms_acceptance: bool,
}

impl ValidationRules {
    /// Validate a single field against the current values
    pub fn validate_field(&self, field: FieldName, values: &FormValues) -> Option<ValidationError> {
        match field {
            FieldName::FirstName => bounded_text(&values.first_name, "First name", FIRST_NAME_MAX_LEN),
            FieldName::LastName => bounded_text(&values.last_name, "Last name", LAST_NAME_MAX_LEN),
            FieldName::Email => {
                if values.email.is_empty() {
                    Some(ValidationError::Required)
                } else if !is_valid_email(&values.email) {
                    Some(ValidationError::InvalidEmail)
                } else {
                    None
                }
            }
            FieldName::JobType => values
                .job_type
                .is_none()
                .then_some(ValidationError::MissingJobType),
            FieldName::AcceptedTerms => (self.require_terms_acceptance && !values.accepted_terms)
                .then_some(ValidationError::TermsNotAccepted),
        }
    }

    /// Validate every field
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        FieldName::ALL
            .iter()
            .filter_map(|&field| self.validate_field(field, values).map(|e| (field, e)))
            .collect()
    }
}

/// Length is measured in UTF-16 code units
fn bounded_text(value: &str, label: &'static str, max: usize) -> Option<ValidationError> {
    if value.is_empty() {
        Some(ValidationError::Required)
    } else if value.encode_utf16().count() > max {
        Some(ValidationError::TooLong { label, max })
    } else {
        None
    }
}

/// Check whether a value is shaped like an email address
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}
