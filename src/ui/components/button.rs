//! Submit button

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Widest the button is drawn
const BUTTON_MAX_WIDTH: u16 = 20;

/// What the submit button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitButton {
    Idle,
    Focused,
    /// A submission is pending; the button ignores focus
    Submitting,
}

impl SubmitButton {
    pub fn new(is_focused: bool, is_submitting: bool) -> Self {
        match (is_submitting, is_focused) {
            (true, _) => Self::Submitting,
            (false, true) => Self::Focused,
            (false, false) => Self::Idle,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Submitting => "Submitting…",
            Self::Idle | Self::Focused => "Submit",
        }
    }

    fn styles(self) -> (Style, Style) {
        match self {
            Self::Idle => (Style::default().fg(Color::DarkGray), Style::default()),
            Self::Focused => (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Self::Submitting => (
                Style::default().fg(Color::DarkGray),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ),
        }
    }
}

/// Render the submit button in the left part of `area`
pub fn render_submit_button(frame: &mut Frame, area: Rect, button: SubmitButton) {
    let (border_style, text_style) = button.styles();
    let border_type = if button == SubmitButton::Focused {
        BorderType::Thick
    } else {
        BorderType::Plain
    };

    let marker = if button == SubmitButton::Focused { "▶ " } else { "  " };
    let line = Line::from(vec![
        Span::styled(marker, text_style),
        Span::styled(button.label(), text_style),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let area = Rect {
        width: area.width.min(BUTTON_MAX_WIDTH),
        ..area
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}
