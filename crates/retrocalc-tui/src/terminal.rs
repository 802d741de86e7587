//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard and mouse events and ratatui for rendering. Effect timers are
//! tokio tasks that post their expiry back through a channel.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use retrocalc_app::{App, AppEvent, Driver, EffectId, KeyInput};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::ui::{self, KeyRegion, keypad};

/// Interval between idle ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui) and effect timers
/// (tokio). Remembers where the keypad was last drawn so mouse clicks can be
/// mapped to buttons.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    expiry_tx: mpsc::UnboundedSender<EffectId>,
    expiry_rx: mpsc::UnboundedReceiver<EffectId>,
    keypad: Vec<KeyRegion>,
}

impl TerminalDriver {
    /// Create a new terminal driver.
    ///
    /// Switches the terminal to raw mode, the alternate screen and mouse
    /// capture; all three are undone on drop.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();
        let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();

        Ok(Self { terminal, event_stream, expiry_tx, expiry_rx, keypad: Vec::new() })
    }

    /// Convert a crossterm key event to `KeyInput`.
    pub fn convert_key(event: KeyEvent) -> Option<KeyInput> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(KeyInput::Ctrl(c))
            },
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Esc => Some(KeyInput::Esc),
            _ => None,
        }
    }

    /// Convert a crossterm event to an `AppEvent`.
    ///
    /// Left clicks on a keypad button become [`AppEvent::Press`]; events the
    /// calculator has no use for yield `None`.
    pub fn convert_event(event: Event, keypad: &[KeyRegion]) -> Option<AppEvent> {
        match event {
            Event::Key(key) => Self::convert_key(key).map(AppEvent::Key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left), column, row, ..
            }) => keypad::hit_test(keypad, column, row).map(AppEvent::Press),
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            tokio::select! {
                biased;

                // Expired effect timers
                Some(id) = self.expiry_rx.recv() => {
                    return Ok(Some(AppEvent::EffectExpired(id)));
                }

                // Terminal events
                maybe_event = self.event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(event) = Self::convert_event(event, &self.keypad) {
                                return Ok(Some(event));
                            }
                        },
                        Some(Err(e)) => return Err(TerminalError::Io(e)),
                        None => return Ok(None),
                    }
                }

                // Idle tick
                () = tokio::time::sleep(TICK_INTERVAL) => {
                    return Ok(Some(AppEvent::Tick));
                }
            }
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let mut keypad = Vec::new();
        self.terminal.draw(|frame| {
            keypad = ui::render(frame, app);
        })?;
        self.keypad = keypad;
        Ok(())
    }

    fn schedule(&mut self, id: EffectId, after: Duration) {
        let tx = self.expiry_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // Receiver is gone only during shutdown, when effects no longer matter
            let _ = tx.send(id);
        });
    }

    fn stop(&mut self) {
        tracing::debug!("restoring terminal");
        let _ = stdout().execute(DisableMouseCapture);
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
