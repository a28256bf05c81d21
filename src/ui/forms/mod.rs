//! Form rendering module
//!
//! - `field_renderer`: field wrappers (text input, select, checkbox)
//! - `signup_form`: the signup form layout

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup_form;
