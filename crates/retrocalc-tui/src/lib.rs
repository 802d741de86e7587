//! Terminal UI for retro-calc
//!
//! A thin shell over [`retrocalc_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`retrocalc_app::Runtime`].
//!
//! This crate only handles terminal input (keyboard and mouse), timers and
//! rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use retrocalc_app::{App, AppAction, AppEvent, Driver, EffectTimings, Input, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
