//! Signup form layout

use super::field_renderer::{
    draw_checkbox, draw_select, draw_text_input, CHECKBOX_HEIGHT, ERROR_HEIGHT, INPUT_HEIGHT,
};
use crate::app::App;
use crate::state::FieldKind;
use crate::ui::components::{render_submit_button, SubmitButton, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the form container grows to
const FORM_MAX_WIDTH: u16 = 60;

/// Draw the signup form centered in `area`
pub fn draw_signup_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;

    let mut constraints: Vec<Constraint> = form
        .fields()
        .iter()
        .map(|field| match field.kind {
            FieldKind::Text { .. } | FieldKind::Select { .. } => {
                Constraint::Length(INPUT_HEIGHT + ERROR_HEIGHT)
            }
            FieldKind::Checkbox { .. } => Constraint::Length(CHECKBOX_HEIGHT + ERROR_HEIGHT),
        })
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Help text

    let content_height: u16 = form
        .fields()
        .iter()
        .map(|field| match field.kind {
            FieldKind::Checkbox { .. } => CHECKBOX_HEIGHT + ERROR_HEIGHT,
            _ => INPUT_HEIGHT + ERROR_HEIGHT,
        })
        .sum::<u16>()
        + BUTTON_HEIGHT
        + 1
        + 4; // borders + spacing above help
    let container = centered_rect(area, FORM_MAX_WIDTH, content_height);

    let block = Block::default()
        .title(Span::styled(
            " Register ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, container);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(container);

    for (index, field) in form.fields().iter().enumerate() {
        let state = form.field_state(field.name);
        let is_active = form.active_field_index == index;
        match field.kind {
            FieldKind::Text { .. } => draw_text_input(frame, chunks[index], field, &state, is_active),
            FieldKind::Select { .. } => draw_select(frame, chunks[index], field, &state, is_active),
            FieldKind::Checkbox { .. } => draw_checkbox(frame, chunks[index], field, &state, is_active),
        }
    }

    let submit_index = form.fields().len();
    let button = SubmitButton::new(form.is_submit_row_active(), form.is_submitting());
    render_submit_button(frame, chunks[submit_index], button);

    draw_help_text(frame, chunks[submit_index + 2]);
}

fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key_style),
        Span::raw(": next  "),
        Span::styled("Space", key_style),
        Span::raw(": toggle  "),
        Span::styled("Ctrl+S", key_style),
        Span::raw(": submit  "),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// Center a rect of at most `width` x `height` inside `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
