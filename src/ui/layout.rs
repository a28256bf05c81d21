//! Screen layout: form area and status bar

use crate::app::App;
use crate::state::{FieldKind, FieldName};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main area and the one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let status_height = 1.min(area.height);
    let main = Rect {
        height: area.height - status_height,
        ..area
    };
    let status = Rect {
        y: area.y + main.height,
        height: status_height,
        ..area
    };
    (main, status)
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission status
    let indicator = if app.form.is_submitting() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_field_hints(app),
        Style::default().fg(Color::Gray),
    ));

    let visible_errors = FieldName::ALL
        .iter()
        .filter(|&&field| app.form.visible_error(field).is_some())
        .count();
    if visible_errors > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{visible_errors} to fix"),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused field
fn get_field_hints(app: &App) -> &'static str {
    if app.form.is_submitting() {
        return "Submitting...";
    }
    match app.form.active_form_field().map(|f| f.kind) {
        Some(FieldKind::Text { .. }) => "type:edit  Backspace:delete  Tab:next",
        Some(FieldKind::Select { .. }) => "Space/←/→:choose  Tab:next",
        Some(FieldKind::Checkbox { .. }) => "Space:toggle  Tab:next",
        None => "Enter:submit  Tab:first field",
    }
}
