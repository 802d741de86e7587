//! Keypad
//!
//! The button grid. The same [`layout`] drives rendering and mouse
//! hit-testing, so a click always lands on the button drawn under it.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};
use retrocalc_app::{Input, Operator};

use crate::App;

/// Button rows, top to bottom. Each button carries its relative width.
pub const KEYPAD: [&[(Input, u16)]; 5] = [
    &[(Input::Clear, 2), (Input::Delete, 1), (Input::Operator(Operator::Divide), 1)],
    &[
        (Input::Digit('7'), 1),
        (Input::Digit('8'), 1),
        (Input::Digit('9'), 1),
        (Input::Operator(Operator::Multiply), 1),
    ],
    &[
        (Input::Digit('4'), 1),
        (Input::Digit('5'), 1),
        (Input::Digit('6'), 1),
        (Input::Operator(Operator::Subtract), 1),
    ],
    &[
        (Input::Digit('1'), 1),
        (Input::Digit('2'), 1),
        (Input::Digit('3'), 1),
        (Input::Operator(Operator::Add), 1),
    ],
    &[(Input::Digit('0'), 2), (Input::Digit('.'), 1), (Input::Equals, 1)],
];

/// Screen area occupied by one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRegion {
    /// Button bounds, border included.
    pub area: Rect,
    /// Input the button produces.
    pub input: Input,
}

/// Split `area` into button regions.
pub fn layout(area: Rect) -> Vec<KeyRegion> {
    let rows = Layout::vertical([Constraint::Fill(1); KEYPAD.len()]).split(area);

    let mut regions = Vec::new();
    for (row_area, keys) in rows.iter().zip(KEYPAD) {
        let cols = Layout::horizontal(keys.iter().map(|(_, width)| Constraint::Fill(*width)))
            .split(*row_area);
        for (area, (input, _)) in cols.iter().zip(keys.iter()) {
            regions.push(KeyRegion { area: *area, input: *input });
        }
    }
    regions
}

/// Button under the given cell, if any.
pub fn hit_test(regions: &[KeyRegion], column: u16, row: u16) -> Option<Input> {
    let position = Position::new(column, row);
    regions.iter().find(|region| region.area.contains(position)).map(|region| region.input)
}

/// Render the keypad. Returns the regions for hit-testing.
pub fn render(frame: &mut Frame, app: &App, area: Rect) -> Vec<KeyRegion> {
    let regions = layout(area);

    for region in &regions {
        let mut style = Style::default().fg(button_color(region.input));
        if app.is_pressed(region.input) {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }

        let button = Paragraph::new(Line::from(region.input.label()).centered())
            .style(style)
            .block(Block::bordered());
        frame.render_widget(button, region.area);
    }

    regions
}

fn button_color(input: Input) -> Color {
    match input {
        Input::Digit(_) => Color::White,
        Input::Operator(_) => Color::Yellow,
        Input::Equals => Color::Green,
        Input::Clear | Input::Delete => Color::Red,
    }
}
