//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use components::{render_alert_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_signup_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Modal dialogs on top; errors take precedence
    if let Some(error) = &app.error_message {
        render_error_dialog(frame, error);
    } else if let Some(alert) = &app.alert_message {
        render_alert_dialog(frame, alert);
    }
}
