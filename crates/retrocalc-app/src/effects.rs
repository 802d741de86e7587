//! Timed cosmetic effects.
//!
//! Button press flashes, the error flash and the startup banner are purely
//! presentational. They live here, next to but never inside the calculator
//! state, and each activation is tagged with a fresh [`EffectId`]. An expiry
//! only ends an effect if its id is still the latest one for that effect, so
//! a timer from an earlier press cannot cut a later flash short.

use std::{collections::HashMap, fmt, time::Duration};

use retrocalc_core::Input;

/// A cosmetic presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Startup banner on the current line.
    Startup,
    /// Keypad button highlighted after activation.
    Pressed(Input),
    /// Display highlighted after an arithmetic error.
    ErrorFlash,
}

/// Identifies one activation of an [`Effect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(u64);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How long each effect stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTimings {
    /// Keypad button highlight.
    pub press_flash: Duration,
    /// Error highlight.
    pub error_flash: Duration,
    /// Startup banner.
    pub startup: Duration,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            press_flash: Duration::from_millis(150),
            error_flash: Duration::from_millis(1800),
            startup: Duration::from_millis(1000),
        }
    }
}

/// Set of active effects.
#[derive(Debug, Clone, Default)]
pub struct Effects {
    next_id: u64,
    active: HashMap<Effect, EffectId>,
}

impl Effects {
    /// Create an empty effect set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `effect`, superseding any earlier activation of it.
    pub fn start(&mut self, effect: Effect) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.active.insert(effect, id);
        id
    }

    /// End the activation `id`.
    ///
    /// Returns the effect that ended, or `None` if `id` was superseded or
    /// already cancelled.
    pub fn expire(&mut self, id: EffectId) -> Option<Effect> {
        let effect =
            self.active.iter().find_map(|(effect, active)| (*active == id).then_some(*effect))?;
        self.active.remove(&effect);
        Some(effect)
    }

    /// End `effect` immediately. Returns true if it was active.
    pub fn cancel(&mut self, effect: Effect) -> bool {
        self.active.remove(&effect).is_some()
    }

    /// Returns true if `effect` is active.
    pub fn is_active(&self, effect: Effect) -> bool {
        self.active.contains_key(&effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expire_ends_effect() {
        let mut effects = Effects::new();
        let id = effects.start(Effect::ErrorFlash);

        assert!(effects.is_active(Effect::ErrorFlash));
        assert_eq!(effects.expire(id), Some(Effect::ErrorFlash));
        assert!(!effects.is_active(Effect::ErrorFlash));
    }

    #[test]
    fn stale_expiry_keeps_newer_activation() {
        let mut effects = Effects::new();
        let press = Effect::Pressed(Input::Digit('7'));

        let first = effects.start(press);
        let second = effects.start(press);

        assert_eq!(effects.expire(first), None);
        assert!(effects.is_active(press));

        assert_eq!(effects.expire(second), Some(press));
        assert!(!effects.is_active(press));
    }

    #[test]
    fn expiry_after_cancel_is_ignored() {
        let mut effects = Effects::new();
        let id = effects.start(Effect::Startup);

        assert!(effects.cancel(Effect::Startup));
        assert_eq!(effects.expire(id), None);
        assert!(!effects.cancel(Effect::Startup));
    }

    #[test]
    fn effects_are_independent() {
        let mut effects = Effects::new();
        let seven = effects.start(Effect::Pressed(Input::Digit('7')));
        let _eight = effects.start(Effect::Pressed(Input::Digit('8')));

        let _ = effects.expire(seven);
        assert!(effects.is_active(Effect::Pressed(Input::Digit('8'))));
    }

    #[test]
    fn default_timings() {
        let timings = EffectTimings::default();
        assert_eq!(timings.press_flash, Duration::from_millis(150));
        assert_eq!(timings.error_flash, Duration::from_millis(1800));
        assert_eq!(timings.startup, Duration::from_millis(1000));
    }
}
