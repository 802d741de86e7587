//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::{future::Future, time::Duration};

use crate::{App, AppEvent, EffectId};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the terminal and in tests.
///
/// # Implementations
///
/// - **TUI**: crossterm for keyboard and mouse events, ratatui for rendering,
///   tokio timers for effect expiry
/// - **Tests**: scripted events and virtual timers
/// - **Web**: Could use DOM events and `setTimeout`
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `None` once the input source is exhausted.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Arrange for [`AppEvent::EffectExpired`] to be delivered after `after`.
    ///
    /// Must not block. Timers are cosmetic, so a driver may deliver them late
    /// or drop them on shutdown.
    fn schedule(&mut self, id: EffectId, after: Duration);

    /// Release resources before exit.
    fn stop(&mut self);
}
