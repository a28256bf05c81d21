//! Form domain layer
//!
//! Field descriptors, derived per-field state and the signup form state
//! machine. Rendering lives in `ui::forms`.

mod field;
mod form_state;

pub use field::{FieldKind, FieldName, FieldState, FieldValue, FormField};
pub use form_state::{Form, SignupForm, SubmitError};
