//! ttt_duel - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use ttt_engine::GameEngine;
use ttt_tui::{
    App, Cli, TuiConfig, finish_session, init_tracing, restore_terminal, run, setup_terminal,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(
        TuiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?,
    );
    init_tracing(&config)?;

    info!(theme = %config.theme(), log_file = %config.log_file().display(), "Starting ttt_duel");

    let mut app = App::new(GameEngine::with_theme(*config.theme()));
    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    finish_session(res, restore_terminal(&mut terminal))
}
