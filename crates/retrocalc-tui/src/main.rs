//! retro-calc terminal entry point.
//!
//! # Usage
//!
//! ```bash
//! # Run with default effect timings and no logging
//! retrocalc
//!
//! # Log debug output to a file (the terminal itself is taken by the UI)
//! retrocalc --log-file retrocalc.log --log-level debug
//! ```

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use retrocalc_tui::{EffectTimings, Runtime, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Four-function calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "retrocalc")]
#[command(about = "Retro four-function calculator with keyboard and mouse input")]
#[command(version)]
struct Args {
    /// How long a pressed button stays highlighted, in milliseconds
    #[arg(long, default_value = "150")]
    press_flash_ms: u64,

    /// How long the display flashes after an error, in milliseconds
    #[arg(long, default_value = "1800")]
    error_flash_ms: u64,

    /// How long the startup banner is shown, in milliseconds
    #[arg(long, default_value = "1000")]
    startup_ms: u64,

    /// Write logs to this file. Logging is off when omitted.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn timings(&self) -> EffectTimings {
        EffectTimings {
            press_flash: Duration::from_millis(self.press_flash_ms),
            error_flash: Duration::from_millis(self.error_flash_ms),
            startup: Duration::from_millis(self.startup_ms),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        let file = File::create(path)?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    }

    let timings = args.timings();
    tracing::info!(?timings, "retro-calc starting");

    let driver = TerminalDriver::new()?;
    let mut runtime = Runtime::new(driver, timings);
    runtime.run().await?;

    tracing::info!("retro-calc stopped");
    Ok(())
}
