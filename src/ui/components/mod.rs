//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_submit_button, SubmitButton, BUTTON_HEIGHT};
pub use dialog::{render_alert_dialog, render_error_dialog};
