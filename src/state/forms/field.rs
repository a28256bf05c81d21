//! Form field descriptors and derived per-field state

use crate::state::{FormValues, JobType, ValidationError};

/// Identifies one field of the signup form, in on-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    JobType,
    AcceptedTerms,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::JobType,
        FieldName::AcceptedTerms,
    ];

    /// Key used for this field in the submitted value set
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::JobType => "jobType",
            Self::AcceptedTerms => "acceptedTerms",
        }
    }
}

/// Kind of control a field is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { placeholder: &'static str },
    Select { placeholder: &'static str },
    Checkbox { text: &'static str },
}

/// Static description of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    pub const fn text(name: FieldName, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text { placeholder },
        }
    }

    pub const fn select(name: FieldName, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select { placeholder },
        }
    }

    pub const fn checkbox(name: FieldName, text: &'static str) -> Self {
        Self {
            name,
            label: "",
            kind: FieldKind::Checkbox { text },
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text { .. })
    }
}

/// Fields of the signup form, in the order they are rendered and focused
pub static SIGNUP_FIELDS: [FormField; 5] = [
    FormField::text(FieldName::FirstName, "First Name", "Jane"),
    FormField::text(FieldName::LastName, "Last Name", "Doe"),
    FormField::text(FieldName::Email, "Email Address", "jane@formik.com"),
    FormField::select(FieldName::JobType, "Job Type", "Select a job type"),
    FormField::checkbox(FieldName::AcceptedTerms, "I accept the terms and conditions"),
];

/// Current value of a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Select(Option<JobType>),
    Checkbox(bool),
}

impl FieldValue {
    /// Read a field's value out of the full value set
    pub fn from_values(name: FieldName, values: &FormValues) -> Self {
        match name {
            FieldName::FirstName => Self::Text(values.first_name.clone()),
            FieldName::LastName => Self::Text(values.last_name.clone()),
            FieldName::Email => Self::Text(values.email.clone()),
            FieldName::JobType => Self::Select(values.job_type),
            FieldName::AcceptedTerms => Self::Checkbox(values.accepted_terms),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Select(_) | Self::Checkbox(_) => "",
        }
    }
}

/// Value, touched flag and current error of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: FieldValue,
    pub touched: bool,
    pub error: Option<ValidationError>,
}

impl FieldState {
    /// The error to display, if the field has been visited
    pub fn visible_error(&self) -> Option<&ValidationError> {
        if self.touched {
            self.error.as_ref()
        } else {
            None
        }
    }
}
