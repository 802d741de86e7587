//! Property-based tests for App state machine.
//!
//! Tests verify that cosmetic effects never influence calculator state and
//! that the display always reflects the state, under arbitrary event
//! sequences.

use proptest::prelude::*;
use retrocalc_app::{
    App, AppAction, AppEvent, Calculator, ERROR_LABEL, EffectId, Input, KeyInput, Operator, render,
};

/// Generate keyboard keys, including ones the calculator ignores.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        8 => prop::sample::select("0123456789.+-*/=xq ".chars().collect::<Vec<_>>())
            .prop_map(KeyInput::Char),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Esc),
    ]
}

/// Generate pointer presses on keypad buttons.
fn press_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => prop::sample::select("0123456789.".chars().collect::<Vec<_>>()).prop_map(Input::Digit),
        2 => prop::sample::select(Operator::ALL.to_vec()).prop_map(Input::Operator),
        1 => Just(Input::Equals),
        1 => Just(Input::Clear),
        1 => Just(Input::Delete),
    ]
}

#[derive(Debug, Clone)]
enum Step {
    Key(KeyInput),
    Press(Input),
    /// Expire the n-th scheduled effect (modulo the number scheduled).
    Expire(usize),
    Tick,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => key_strategy().prop_map(Step::Key),
        3 => press_strategy().prop_map(Step::Press),
        2 => any::<usize>().prop_map(Step::Expire),
        1 => Just(Step::Tick),
    ]
}

proptest! {
    #[test]
    fn prop_effects_do_not_touch_state(steps in prop::collection::vec(step_strategy(), 0..60)) {
        let mut app = App::default();
        let mut oracle = Calculator::new();
        let mut scheduled: Vec<EffectId> = Vec::new();

        for action in app.start() {
            if let AppAction::Schedule { id, .. } = action {
                scheduled.push(id);
            }
        }

        for step in steps {
            let event = match step {
                Step::Key(key) => {
                    if let Some(input) = key.to_input() {
                        let _ = oracle.apply(input);
                    }
                    AppEvent::Key(key)
                },
                Step::Press(input) => {
                    let _ = oracle.apply(input);
                    AppEvent::Press(input)
                },
                Step::Expire(n) if !scheduled.is_empty() => {
                    AppEvent::EffectExpired(scheduled[n % scheduled.len()])
                },
                Step::Expire(_) | Step::Tick => AppEvent::Tick,
            };

            for action in app.handle(event) {
                prop_assert_ne!(&action, &AppAction::Quit);
                if let AppAction::Schedule { id, .. } = action {
                    scheduled.push(id);
                }
            }

            prop_assert_eq!(app.state(), oracle.state());
        }
    }

    #[test]
    fn prop_display_matches_state(keys in prop::collection::vec(key_strategy(), 0..60)) {
        let mut app = App::default();

        for key in keys {
            let _ = app.handle(AppEvent::Key(key));

            let display = app.display();
            prop_assert_eq!(&display, &render(app.state()));
            prop_assert_eq!(display.current == ERROR_LABEL, app.state().is_error());
            prop_assert_eq!(display.previous.is_empty(), app.state().operation().is_none());
        }
    }

    #[test]
    fn prop_error_flash_only_after_failure(keys in prop::collection::vec(key_strategy(), 0..60)) {
        let mut app = App::default();

        for key in keys {
            let _ = app.handle(AppEvent::Key(key));
            if app.is_error_flash() {
                break;
            }
            prop_assert!(!app.state().is_error());
        }
    }
}
