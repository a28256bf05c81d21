//! Field wrappers: one control per field plus its error line
//!
//! Wrappers never validate anything themselves. They render the
//! [`FieldState`] derived by the form, and only show its error once the
//! field has been touched.

use crate::state::{FieldKind, FieldState, FieldValue, FormField, JobType};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered input control
pub const INPUT_HEIGHT: u16 = 3;
/// Rows taken by a checkbox line
pub const CHECKBOX_HEIGHT: u16 = 1;
/// Rows reserved under every field for its error
pub const ERROR_HEIGHT: u16 = 1;

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn labeled_block(label: &str, is_active: bool, state: &FieldState) -> Block<'static> {
    let border = if state.visible_error().is_some() && !is_active {
        Style::default().fg(Color::Red)
    } else {
        border_style(is_active)
    };
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border)
}

/// Draw a text input with placeholder and cursor
pub fn draw_text_input(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    state: &FieldState,
    is_active: bool,
) {
    let placeholder = match field.kind {
        FieldKind::Text { placeholder } => placeholder,
        _ => "",
    };
    let value = state.value.as_text();
    let cursor = if is_active { "▌" } else { "" };

    let value_span = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else if is_active {
        Span::styled(value, Style::default().fg(Color::Cyan))
    } else {
        Span::raw(value)
    };

    let line = if is_active && value.is_empty() {
        // Cursor sits before the placeholder so it reads as a hint, not a value
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            value_span,
        ])
    } else {
        Line::from(vec![
            value_span,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let (control_area, error_area) = split_error_row(area, INPUT_HEIGHT);
    frame.render_widget(
        Paragraph::new(line).block(labeled_block(field.label, is_active, state)),
        control_area,
    );
    draw_field_error(frame, error_area, state);
}

/// Draw the job type select as `◀ option ▶`
pub fn draw_select(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    state: &FieldState,
    is_active: bool,
) {
    let placeholder = match field.kind {
        FieldKind::Select { placeholder } => placeholder,
        _ => "",
    };
    let selected = match state.value {
        FieldValue::Select(job_type) => job_type,
        _ => None,
    };

    let (text, text_style) = match selected {
        Some(job) => (job.label(), Style::default()),
        None => (placeholder, Style::default().fg(Color::DarkGray)),
    };
    let arrow_style = border_style(is_active);

    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(text, text_style),
        Span::styled(" ▶", arrow_style),
        Span::styled(
            format!("  ({}/{})", option_position(selected), JobType::ALL.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let (control_area, error_area) = split_error_row(area, INPUT_HEIGHT);
    frame.render_widget(
        Paragraph::new(line).block(labeled_block(field.label, is_active, state)),
        control_area,
    );
    draw_field_error(frame, error_area, state);
}

fn option_position(selected: Option<JobType>) -> usize {
    selected
        .and_then(|job| JobType::ALL.iter().position(|j| *j == job))
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Draw a checkbox with its inline label text
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    state: &FieldState,
    is_active: bool,
) {
    let text = match field.kind {
        FieldKind::Checkbox { text } => text,
        _ => field.label,
    };
    let checked = matches!(state.value, FieldValue::Checkbox(true));
    let mark = if checked { "[x] " } else { "[ ] " };

    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let (control_area, error_area) = split_error_row(area, CHECKBOX_HEIGHT);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(mark, style),
            Span::styled(text, style),
        ])),
        control_area,
    );
    draw_field_error(frame, error_area, state);
}

/// Draw zero or one error line for a field
pub fn draw_field_error(frame: &mut Frame, area: Rect, state: &FieldState) {
    if area.height == 0 {
        return;
    }
    if let Some(error) = state.visible_error() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            )),
            area,
        );
    }
}

/// Split a field area into its control rows and the error row below
fn split_error_row(area: Rect, control_height: u16) -> (Rect, Rect) {
    let control_height = control_height.min(area.height);
    let control = Rect {
        height: control_height,
        ..area
    };
    let error = Rect {
        y: area.y + control_height,
        height: (area.height - control_height).min(ERROR_HEIGHT),
        ..area
    };
    (control, error)
}
