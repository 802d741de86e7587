//! Application layer for retro-calc
//!
//! Pure presentation adapter and generic runtime around the
//! [`retrocalc_core::Calculator`], so the same orchestration code runs in the
//! terminal front end and in headless tests.
//!
//! # Components
//!
//! - [`App`]: UI state machine (input dispatch, cosmetic effects)
//! - [`render`]: calculator state to the two display lines
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod display;
mod driver;
mod effects;
mod event;
mod input;
mod runtime;

pub use action::AppAction;
pub use app::App;
pub use display::{DisplayText, ERROR_LABEL, STARTUP_LABEL, format_operand, render};
pub use driver::Driver;
pub use effects::{Effect, EffectId, EffectTimings, Effects};
pub use event::AppEvent;
pub use input::KeyInput;
pub use retrocalc_core::{Calculator, CalculatorState, ComputeError, Input, Operator, Transition};
pub use runtime::Runtime;
