//! Console front end for tic-tac-toe.
//!
//! Wires a line-oriented [`Terminal`] to the core [`Session`]: settings are
//! resolved once, players are named once, and rounds repeat until a rematch
//! is declined or input ends.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod input;
pub mod settings;
pub mod terminal;

// Crate-level exports - Startup
pub use cli::Cli;
pub use settings::Settings;

// Crate-level exports - Terminal
pub use input::parse_move;
pub use terminal::{rejection_message, Terminal};

use std::io::{BufRead, Write};
use tictactoe_core::{GameConfig, PlayError, Scoreboard, Session};
use tracing::{info, instrument};

/// Runs a whole session on a terminal and returns the final tally.
///
/// End of input during play is a normal way to stop: the farewell is still
/// shown with the rounds completed so far.
#[instrument(skip(terminal), fields(size = %config.size()))]
pub fn play<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    config: GameConfig,
) -> Result<Scoreboard, PlayError> {
    terminal.welcome()?;
    let players = terminal.ask_players(config.marks())?;
    terminal.greet(&players)?;

    let mut session = Session::new(config, players);
    if let Err(e) = session.run(terminal) {
        if !e.is_input_closed() {
            return Err(e);
        }
        info!(rounds = session.scoreboard().rounds(), "Input closed, ending session");
    }

    terminal.farewell(session.players(), session.scoreboard())?;
    Ok(*session.scoreboard())
}
