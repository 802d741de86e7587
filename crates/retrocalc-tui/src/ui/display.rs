//! Display panel
//!
//! Previous operand with pending operator on top, current operand below,
//! both right-aligned like a desk calculator.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::App;

const TITLE: &str = " RETRO-CALC 90 ";

/// Render the display panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let display = app.display();

    let border = if app.is_error_flash() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    let current_style = if app.state().is_error() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::styled(display.previous, Style::default().fg(Color::DarkGray)).right_aligned(),
        Line::styled(display.current, current_style).right_aligned(),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::bordered().title(TITLE).border_style(border));

    frame.render_widget(paragraph, area);
}
