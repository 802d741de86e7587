//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Driver`]: Platform-specific I/O
//!
//! Each event is fully processed (state mutation, timer scheduling, render)
//! before the next one is polled.

use crate::{App, AppAction, Driver, EffectTimings};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and effect durations.
    pub fn new(driver: D, timings: EffectTimings) -> Self {
        Self { driver, app: App::new(timings) }
    }

    /// Run the main event loop until the App quits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        let actions = self.app.start();
        self.process_actions(actions)?;

        while let Some(event) = self.driver.poll_event().await? {
            let actions = self.app.handle(event);
            if self.process_actions(actions)? {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => {
                    tracing::info!("quit requested");
                    return Ok(true);
                },
                AppAction::Schedule { id, after } => self.driver.schedule(id, after),
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
