//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe on a text console
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on a text console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (ignored if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Board side length
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Glyph for the player who moves first
    #[arg(long)]
    pub first_mark: Option<char>,

    /// Glyph for the player who moves second
    #[arg(long)]
    pub second_mark: Option<char>,

    /// Keep previous output on screen instead of clearing it each turn
    #[arg(long)]
    pub no_clear: bool,

    /// File that receives log output (RUST_LOG controls the level)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
