//! Signup form state: values, touched fields, errors and submission status

use super::field::{FieldKind, FieldName, FieldState, FieldValue, FormField, SIGNUP_FIELDS};
use crate::state::{FieldErrors, FormValues, JobType, ValidationError, ValidationRules};
use std::collections::BTreeSet;
use thiserror::Error;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    /// Called when focus leaves the active field
    fn blur(&mut self);
    fn next_field(&mut self) {
        self.blur();
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        self.blur();
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Reasons a submit attempt does not reach the handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    InProgress,
    #[error("{0} field(s) need attention")]
    Invalid(usize),
}

/// State of the signup form for one session
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub values: FormValues,
    touched: BTreeSet<FieldName>,
    errors: FieldErrors,
    rules: ValidationRules,
    /// Index into the fields; `SIGNUP_FIELDS.len()` is the submit button row
    pub active_field_index: usize,
    is_submitting: bool,
    pub submit_count: u32,
}

impl SignupForm {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            values: FormValues::default(),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            rules,
            active_field_index: 0,
            is_submitting: false,
            submit_count: 0,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        &SIGNUP_FIELDS
    }

    /// Descriptor of the focused field, `None` on the submit row
    pub fn active_form_field(&self) -> Option<&'static FormField> {
        SIGNUP_FIELDS.get(self.active_field_index)
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SIGNUP_FIELDS.len()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// Derive the state of one field from values, touched set and errors
    pub fn field_state(&self, field: FieldName) -> FieldState {
        FieldState {
            value: FieldValue::from_values(field, &self.values),
            touched: self.is_touched(field),
            error: self.errors.get(&field).cloned(),
        }
    }

    /// The error shown under a field, if any
    pub fn visible_error(&self, field: FieldName) -> Option<&ValidationError> {
        if self.is_touched(field) {
            self.errors.get(&field)
        } else {
            None
        }
    }

    fn revalidate(&mut self, field: FieldName) {
        match self.rules.validate_field(field, &self.values) {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FirstName => Some(&mut self.values.first_name),
            FieldName::LastName => Some(&mut self.values.last_name),
            FieldName::Email => Some(&mut self.values.email),
            FieldName::JobType | FieldName::AcceptedTerms => None,
        }
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_form_field().filter(|f| f.is_text()) else {
            return;
        };
        if let Some(text) = self.text_mut(field.name) {
            text.push(c);
        }
        self.revalidate(field.name);
    }

    /// Remove the last character from the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.active_form_field().filter(|f| f.is_text()) else {
            return;
        };
        if let Some(text) = self.text_mut(field.name) {
            text.pop();
        }
        self.revalidate(field.name);
    }

    /// Replace the value of a text field
    pub fn set_text(&mut self, field: FieldName, value: impl Into<String>) {
        if let Some(text) = self.text_mut(field) {
            *text = value.into();
            self.revalidate(field);
        }
    }

    pub fn set_job_type(&mut self, job_type: Option<JobType>) {
        self.values.job_type = job_type;
        self.revalidate(FieldName::JobType);
    }

    pub fn select_next_job_type(&mut self) {
        self.set_job_type(JobType::next(self.values.job_type));
    }

    pub fn select_prev_job_type(&mut self) {
        self.set_job_type(JobType::prev(self.values.job_type));
    }

    pub fn toggle_terms(&mut self) {
        self.values.accepted_terms = !self.values.accepted_terms;
        self.revalidate(FieldName::AcceptedTerms);
    }

    /// Apply the "toggle" gesture (Space) to the focused field
    ///
    /// Returns false when the focused field takes Space as text input.
    pub fn toggle_active(&mut self) -> bool {
        match self.active_form_field().map(|f| f.kind) {
            Some(FieldKind::Checkbox { .. }) => {
                self.toggle_terms();
                true
            }
            Some(FieldKind::Select { .. }) => {
                self.select_next_job_type();
                true
            }
            Some(FieldKind::Text { .. }) | None => false,
        }
    }

    /// Attempt to submit the form
    ///
    /// Every field becomes touched so all errors surface. On success the
    /// form enters the submitting state and the values to submit are
    /// returned.
    pub fn begin_submit(&mut self) -> Result<FormValues, SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::InProgress);
        }

        self.touched.extend(FieldName::ALL);
        self.submit_count += 1;
        self.errors = self.rules.validate(&self.values);

        if !self.errors.is_empty() {
            return Err(SubmitError::Invalid(self.errors.len()));
        }

        self.is_submitting = true;
        Ok(self.values.clone())
    }

    /// Leave the submitting state, re-enabling submission
    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new(ValidationRules::default())
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        SIGNUP_FIELDS.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SIGNUP_FIELDS.len());
    }
    fn blur(&mut self) {
        if let Some(field) = self.active_form_field() {
            tracing::debug!("Field {} blurred", field.name.key());
            self.touched.insert(field.name);
            self.revalidate(field.name);
        }
    }
}
