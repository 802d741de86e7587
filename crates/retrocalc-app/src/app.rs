//! Application state machine.
//!
//! This module defines the [`App`] state machine, the presentation adapter
//! between input devices and the [`Calculator`]. It is completely decoupled
//! from I/O: it consumes [`crate::AppEvent`] inputs and produces
//! [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Maps keyboard and pointer input to calculator inputs.
//! - Tracks cosmetic effects (press flash, error flash, startup banner) and
//!   asks the runtime to schedule their expiry.
//! - Stores terminal dimensions to handle resize events.

use retrocalc_core::{Calculator, CalculatorState, Input, Transition};

use crate::{
    AppAction, AppEvent, DisplayText, Effect, EffectTimings, Effects, KeyInput, STARTUP_LABEL,
    render,
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Arithmetic state machine.
    calculator: Calculator,
    /// Active cosmetic effects.
    effects: Effects,
    /// Effect durations.
    timings: EffectTimings,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create a new App with the given effect durations.
    pub fn new(timings: EffectTimings) -> Self {
        Self {
            calculator: Calculator::new(),
            effects: Effects::new(),
            timings,
            terminal_size: (80, 24),
        }
    }

    /// Show the startup banner.
    pub fn start(&mut self) -> Vec<AppAction> {
        let id = self.effects.start(Effect::Startup);
        vec![AppAction::Schedule { id, after: self.timings.startup }, AppAction::Render]
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Press(input) => self.dispatch(input),
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::EffectExpired(id) => match self.effects.expire(id) {
                Some(effect) => {
                    tracing::trace!(%id, ?effect, "effect expired");
                    vec![AppAction::Render]
                },
                None => vec![],
            },
        }
    }

    /// Apply one calculator input and re-render.
    ///
    /// The matching keypad button flashes, and a failed computation raises
    /// the error flash. Neither effect touches calculator state.
    pub fn dispatch(&mut self, input: Input) -> Vec<AppAction> {
        let transition = self.calculator.apply(input);
        tracing::debug!(%input, ?transition, "dispatched");

        self.effects.cancel(Effect::Startup);

        let id = self.effects.start(Effect::Pressed(input));
        let mut actions = vec![AppAction::Schedule { id, after: self.timings.press_flash }];

        if let Transition::Failed(_) = transition {
            let id = self.effects.start(Effect::ErrorFlash);
            actions.push(AppAction::Schedule { id, after: self.timings.error_flash });
        }

        actions.push(AppAction::Render);
        actions
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if key.is_quit() {
            return vec![AppAction::Quit];
        }

        match key.to_input() {
            Some(input) => self.dispatch(input),
            None => vec![],
        }
    }

    /// Text for the two display lines, including the startup banner.
    pub fn display(&self) -> DisplayText {
        let mut display = render(self.calculator.state());
        if self.effects.is_active(Effect::Startup) {
            display.current = STARTUP_LABEL.to_string();
        }
        display
    }

    /// Calculator state.
    pub fn state(&self) -> &CalculatorState {
        self.calculator.state()
    }

    /// Returns true if the keypad button for `input` is highlighted.
    pub fn is_pressed(&self, input: Input) -> bool {
        self.effects.is_active(Effect::Pressed(input))
    }

    /// Returns true while the error flash is active.
    pub fn is_error_flash(&self) -> bool {
        self.effects.is_active(Effect::ErrorFlash)
    }

    /// Effect durations.
    pub fn timings(&self) -> EffectTimings {
        self.timings
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(EffectTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use retrocalc_core::Operator;

    use super::*;
    use crate::EffectId;

    fn scheduled(actions: &[AppAction]) -> Vec<EffectId> {
        actions
            .iter()
            .filter_map(|action| match action {
                AppAction::Schedule { id, .. } => Some(*id),
                AppAction::Render | AppAction::Quit => None,
            })
            .collect()
    }

    #[test]
    fn start_shows_banner_until_expiry() {
        let mut app = App::default();
        let actions = app.start();

        assert!(matches!(actions.as_slice(), [AppAction::Schedule { .. }, AppAction::Render]));
        assert_eq!(app.display().current, STARTUP_LABEL);

        let ids = scheduled(&actions);
        assert_eq!(ids.len(), 1);
        assert_eq!(app.handle(AppEvent::EffectExpired(ids[0])), vec![AppAction::Render]);
        assert_eq!(app.display().current, "0");
    }

    #[test]
    fn input_replaces_banner() {
        let mut app = App::default();
        let startup = scheduled(&app.start());

        let _ = app.handle(AppEvent::Key(KeyInput::Char('4')));
        assert_eq!(app.display().current, "4");

        // Banner timer firing later must not re-render or overwrite entry
        assert_eq!(app.handle(AppEvent::EffectExpired(startup[0])), vec![]);
        assert_eq!(app.display().current, "4");
    }

    #[test]
    fn dispatch_flashes_button() {
        let mut app = App::default();
        let actions = app.dispatch(Input::Operator(Operator::Add));

        assert!(matches!(actions.as_slice(), [AppAction::Schedule { .. }, AppAction::Render]));
        assert!(app.is_pressed(Input::Operator(Operator::Add)));

        let ids = scheduled(&actions);
        let _ = app.handle(AppEvent::EffectExpired(ids[0]));
        assert!(!app.is_pressed(Input::Operator(Operator::Add)));
    }

    #[test]
    fn press_flash_uses_configured_duration() {
        let timings = EffectTimings { press_flash: Duration::from_millis(5), ..Default::default() };
        let mut app = App::new(timings);

        let actions = app.dispatch(Input::Digit('1'));
        assert!(matches!(
            actions.first(),
            Some(AppAction::Schedule { after, .. }) if *after == timings.press_flash
        ));
    }

    #[test]
    fn failure_raises_error_flash() {
        let mut app = App::default();
        for c in "9/0".chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
        }

        let actions = app.handle(AppEvent::Key(KeyInput::Enter));
        assert_eq!(scheduled(&actions).len(), 2);
        assert!(app.is_error_flash());
        assert!(app.state().is_error());

        let flash = scheduled(&actions)[1];
        let _ = app.handle(AppEvent::EffectExpired(flash));
        assert!(!app.is_error_flash());
        // Error marker outlives the flash
        assert!(app.state().is_error());
    }

    #[test]
    fn unknown_key_does_nothing() {
        let mut app = App::default();
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Char('q'))), vec![]);
        assert_eq!(app.state(), &CalculatorState::default());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::default();
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Ctrl('c'))), vec![AppAction::Quit]);
    }

    #[test]
    fn pointer_press_matches_keyboard() {
        let mut by_key = App::default();
        let mut by_pointer = App::default();

        for c in "12*3=".chars() {
            let _ = by_key.handle(AppEvent::Key(KeyInput::Char(c)));
        }
        for input in [
            Input::Digit('1'),
            Input::Digit('2'),
            Input::Operator(Operator::Multiply),
            Input::Digit('3'),
            Input::Equals,
        ] {
            let _ = by_pointer.handle(AppEvent::Press(input));
        }

        assert_eq!(by_key.display(), by_pointer.display());
        assert_eq!(by_key.display().current, "36");
    }

    #[test]
    fn resize_tracks_size() {
        let mut app = App::default();
        assert_eq!(app.handle(AppEvent::Resize(120, 40)), vec![AppAction::Render]);
        assert_eq!(app.terminal_size(), (120, 40));
    }
}
