//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use std::time::Duration;

use crate::EffectId;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Deliver [`crate::AppEvent::EffectExpired`] for `id` once `after` has
    /// elapsed. Fire-and-forget: a timer that fires late or never only
    /// affects cosmetics.
    Schedule {
        /// Effect to expire.
        id: EffectId,
        /// Delay before expiry.
        after: Duration,
    },
}
