//! Two-player tic-tac-toe on the text console.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tictactoe_console::{play, Cli, Settings, Terminal};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli).context("Failed to load settings")?;
    init_tracing(settings.log_file())?;

    let config = settings
        .game_config()
        .context("Invalid game configuration")?;
    info!(size = %config.size(), clear_screen = settings.clear_screen(), "Starting tic-tac-toe");

    let mut terminal = Terminal::new(
        std::io::stdin().lock(),
        std::io::stdout(),
        *settings.clear_screen(),
    );

    match play(&mut terminal, config) {
        Ok(scoreboard) => {
            info!(rounds = scoreboard.rounds(), "Session finished");
            Ok(())
        }
        Err(e) if e.is_input_closed() => {
            info!("Input closed before the first round");
            Ok(())
        }
        Err(e) => Err(e).context("Game session failed"),
    }
}

/// Logs go to a file so they never mix with the game screen.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
