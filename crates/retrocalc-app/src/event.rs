//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, pointer, resize) and system ticks.
//! - Expiry of cosmetic timers scheduled through [`crate::AppAction::Schedule`].

use retrocalc_core::Input;

use crate::{EffectId, KeyInput};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Pointer activation of a keypad button.
    Press(Input),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// A scheduled cosmetic effect ran out.
    EffectExpired(EffectId),
}
