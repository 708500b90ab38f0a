//! Line-oriented terminal front end.
//!
//! [`Terminal`] reads whole lines from any [`BufRead`] and writes to any
//! [`Write`], so tests drive it with in-memory buffers.

use crate::input::parse_move;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use tictactoe_core::{
    Announcer, ConsoleError, GameFinished, GameInProgress, MalformedInput, MarkSymbols, MoveError,
    MoveSource, Players, Proposal, RematchPrompt, Rejection, RoundEvent, Scoreboard,
};
use tracing::{debug, info, instrument};

/// Console talking to the players over text streams.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Wraps an input and output stream.
    ///
    /// With `clear_screen` off, output is appended and no escape codes are written.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Returns the output stream, consuming the terminal.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line ending.
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prints a prompt without a newline and reads the answer.
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", text)?;
        self.read_line()
    }

    fn clear(&mut self) -> Result<(), ConsoleError> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Waits for the Enter key.
    pub fn pause(&mut self) -> Result<(), ConsoleError> {
        self.prompt("Press Enter to continue...")?;
        Ok(())
    }

    /// Opening banner.
    pub fn welcome(&mut self) -> Result<(), ConsoleError> {
        self.clear()?;
        writeln!(self.output, "Welcome to Tic Tac Toe!")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Asks both players for their names. Blank answers fall back to
    /// "Player 1" and "Player 2".
    #[instrument(skip(self))]
    pub fn ask_players(&mut self, marks: &MarkSymbols) -> Result<Players, ConsoleError> {
        let first = self.ask_name(1, marks.first())?;
        let second = self.ask_name(2, marks.second())?;
        info!(%first, %second, "Players named");
        Ok(Players::new(first, second))
    }

    fn ask_name(&mut self, number: usize, glyph: char) -> Result<String, ConsoleError> {
        let answer = self.prompt(&format!(
            "Player {} ({}), please enter your name: ",
            number, glyph
        ))?;
        let name = answer.trim();
        if name.is_empty() {
            Ok(format!("Player {}", number))
        } else {
            Ok(name.to_string())
        }
    }

    /// Greets the named players and waits before the first round.
    pub fn greet(&mut self, players: &Players) -> Result<(), ConsoleError> {
        writeln!(
            self.output,
            "Welcome {} and {}! We hope you enjoy playing!",
            players.first(),
            players.second()
        )?;
        self.pause()
    }

    /// Goodbye message and the session tally.
    pub fn farewell(
        &mut self,
        players: &Players,
        scoreboard: &Scoreboard,
    ) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, "Thank you for playing!")?;
        for (mark, wins) in scoreboard.tally() {
            write!(self.output, "{}: {} win(s), ", players.name(mark), wins)?;
        }
        writeln!(self.output, "draws: {}", scoreboard.draws())?;
        self.output.flush()?;
        Ok(())
    }

    fn show_board(&mut self, game: &GameInProgress) -> Result<(), ConsoleError> {
        self.clear()?;
        let board = game.board().render(game.config().marks());
        write!(self.output, "{}", board)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn show_result(
        &mut self,
        game: &GameFinished,
        winner: Option<&str>,
    ) -> Result<(), ConsoleError> {
        self.clear()?;
        let board = game.board().render(game.config().marks());
        write!(self.output, "{}", board)?;
        writeln!(self.output)?;
        match winner {
            Some(name) => {
                writeln!(self.output, "{} has WON! Congratulations!", name)?;
                if let Some(line) = game.winning_line() {
                    writeln!(self.output, "Winning line: {}", line)?;
                }
            }
            None => writeln!(
                self.output,
                "All squares have been filled, and the game ends in a draw!"
            )?,
        }
        writeln!(self.output)?;
        Ok(())
    }
}

/// Feedback line for a refused proposal.
pub fn rejection_message(reason: &Rejection, max: usize) -> String {
    match reason {
        Rejection::Malformed(MalformedInput::NotAnInteger(_)) => format!(
            "This is not valid input. Please enter two INTEGERS from 0 to {}, separated by a space",
            max
        ),
        Rejection::Malformed(MalformedInput::WrongTokenCount(_)) => format!(
            "This is not valid input. Please enter TWO integers from 0 to {}, separated by a space",
            max
        ),
        Rejection::Move(MoveError::OutOfRange { .. }) => format!(
            "This is not valid input. Please enter two integers from 0 to {}, separated by a space",
            max
        ),
        Rejection::Move(_) => format!(
            "This is not a valid move. Please enter another pair of integers from 0 to {}, separated by a space",
            max
        ),
    }
}

impl<R: BufRead, W: Write> MoveSource for Terminal<R, W> {
    #[instrument(skip_all, fields(turn = game.turns()))]
    fn next_move(&mut self, game: &GameInProgress) -> Result<Proposal, ConsoleError> {
        let line = self.prompt("> ")?;
        Ok(parse_move(&line))
    }
}

impl<R: BufRead, W: Write> Announcer for Terminal<R, W> {
    fn announce(&mut self, event: &RoundEvent<'_>) -> Result<(), ConsoleError> {
        match event {
            RoundEvent::TurnStarted { game, player } => {
                self.show_board(game)?;
                let max = game.config().size().max_index();
                writeln!(self.output, "It is now {}'s turn.", player)?;
                writeln!(self.output, "Enter your moves as: ROW COLUMN (0 - {})", max)?;
            }
            RoundEvent::MoveRejected { game, reason } => {
                let max = game.config().size().max_index();
                writeln!(self.output, "{}", rejection_message(reason, max))?;
                self.pause()?;
            }
            RoundEvent::MovePlayed { mv, player } => {
                debug!(%mv, player, "Move shown");
            }
            RoundEvent::RoundOver { game, winner } => {
                self.show_result(game, *winner)?;
            }
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> RematchPrompt for Terminal<R, W> {
    #[instrument(skip(self))]
    fn rematch(&mut self) -> Result<bool, ConsoleError> {
        writeln!(self.output, "If you would like a rematch, please enter \"yes\"")?;
        let answer = self.prompt("Otherwise, enter anything else.\n")?;
        let again = answer.trim().eq_ignore_ascii_case("yes");
        info!(again, "Rematch answered");
        Ok(again)
    }
}
