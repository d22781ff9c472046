//! Command-line interface for ttt_duel.

use crate::config::TuiConfig;
use clap::Parser;
use std::path::PathBuf;
use ttt_engine::ThemeMode;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ttt_duel")]
#[command(about = "Two-player tic-tac-toe with a running score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./ttt_duel.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Starting theme: light or dark
    #[arg(long)]
    pub theme: Option<ThemeMode>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Overlays flags given on the command line onto `config`.
    pub fn apply(&self, config: TuiConfig) -> TuiConfig {
        let config = match self.theme {
            Some(theme) => config.with_theme(theme),
            None => config,
        };
        match &self.log_file {
            Some(path) => config.with_log_file(path.clone()),
            None => config,
        }
    }
}
