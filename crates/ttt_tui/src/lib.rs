//! Terminal UI for ttt_engine.
//!
//! Two players share one keyboard (or mouse). The engine owns all game
//! state; this crate draws it with ratatui and feeds crossterm events
//! back in.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod controller;
mod input;
mod palette;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, TuiConfig};
pub use controller::{
    Tui, finish_session, handle_event, restore_terminal, run, setup_terminal,
};
pub use palette::Palette;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured log file.
///
/// `RUST_LOG` takes precedence over the configured filter. Initialization
/// is skipped silently if a subscriber is already installed.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
