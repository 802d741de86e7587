//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod display;
pub mod keypad;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub use keypad::KeyRegion;

use crate::App;

/// Render the entire UI.
///
/// Returns the keypad regions drawn this frame, for mouse hit-testing.
pub fn render(frame: &mut Frame, app: &App) -> Vec<KeyRegion> {
    const DISPLAY_HEIGHT: u16 = 4;
    const KEYPAD_MIN_HEIGHT: u16 = 15;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(KEYPAD_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [display_area, keypad_area, status_area] = chunks.as_ref() else {
        return Vec::new();
    };

    display::render(frame, app, *display_area);
    let regions = keypad::render(frame, app, *keypad_area);
    status::render(frame, *status_area);

    regions
}
