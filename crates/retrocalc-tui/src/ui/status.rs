//! Status bar
//!
//! Keyboard shortcut reminder.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const SHORTCUTS: [(&str, &str); 4] =
    [("Enter", "="), ("Esc", "AC"), ("Bksp", "DEL"), ("Ctrl+C", "quit")];

/// Render the status bar.
pub fn render(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in SHORTCUTS {
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {action}  ")));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
