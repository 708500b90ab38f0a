//! Collaborator traits between the game loop and whatever talks to the players.
//!
//! The core never reads or prints text itself. A console front end
//! implements [`MoveSource`], [`Announcer`] and [`RematchPrompt`]; tests
//! implement them with scripted values.

use super::action::{Move, MoveError};
use super::typestate::{GameFinished, GameInProgress};
use super::Mark;
use derive_getters::Getters;
use tracing::instrument;

/// Display names of the two players, fixed for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Players {
    /// Plays the first mark.
    first: String,
    /// Plays the second mark.
    second: String,
}

impl Players {
    /// Binds names to the two marks.
    #[instrument(skip(first, second))]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Name of the player holding `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::First => &self.first,
            Mark::Second => &self.second,
        }
    }
}

/// Why a line of player input could not be read as two coordinates.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MalformedInput {
    /// Not exactly two whitespace-separated tokens.
    #[display("expected two coordinates, found {_0} token(s)")]
    WrongTokenCount(usize),
    /// A token is not an integer.
    #[display("'{_0}' is not an integer")]
    NotAnInteger(String),
}

impl std::error::Error for MalformedInput {}

/// What the move source produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    /// Two integers, not yet checked against the board.
    Coordinates {
        /// Proposed row.
        row: i64,
        /// Proposed column.
        col: i64,
    },
    /// Input that could not be parsed.
    Malformed(MalformedInput),
}

/// A proposal the round refused. The player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum Rejection {
    /// The input did not parse.
    #[display("{_0}")]
    Malformed(MalformedInput),
    /// The coordinate is off the board or taken.
    #[display("{_0}")]
    Move(MoveError),
}

impl Rejection {
    /// True when the coordinate was well-formed and on the board but taken.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Rejection::Move(MoveError::SquareOccupied(_)))
    }
}

/// Something that happened during a round.
#[derive(Debug, Clone, Copy)]
pub enum RoundEvent<'a> {
    /// A player is about to be asked for a move.
    TurnStarted {
        /// Current state.
        game: &'a GameInProgress,
        /// Name of the player to move.
        player: &'a str,
    },
    /// The last proposal was refused.
    MoveRejected {
        /// Current state (unchanged).
        game: &'a GameInProgress,
        /// Why.
        reason: &'a Rejection,
    },
    /// A move was applied and the round goes on.
    MovePlayed {
        /// The applied move.
        mv: Move,
        /// Who played it.
        player: &'a str,
    },
    /// The round reached a win or a draw.
    RoundOver {
        /// Final state.
        game: &'a GameFinished,
        /// Winner's name, `None` for a draw.
        winner: Option<&'a str>,
    },
}

/// Console I/O failure seen by the game loop.
#[derive(Debug, derive_more::Display)]
pub enum ConsoleError {
    /// The input stream ended.
    #[display("Input closed")]
    InputClosed,
    /// Reading or writing failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::InputClosed => None,
            ConsoleError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            ConsoleError::InputClosed
        } else {
            ConsoleError::Io(err)
        }
    }
}

/// Supplies moves for the player whose turn it is.
pub trait MoveSource {
    /// Asks for the next move.
    fn next_move(&mut self, game: &GameInProgress) -> Result<Proposal, ConsoleError>;
}

/// Shows round progress to the players.
pub trait Announcer {
    /// Reports an event. Nothing is returned to the game loop.
    fn announce(&mut self, event: &RoundEvent<'_>) -> Result<(), ConsoleError>;
}

/// Asks whether to play another round.
pub trait RematchPrompt {
    /// `true` to play again.
    fn rematch(&mut self) -> Result<bool, ConsoleError>;
}

/// Everything a session needs from its front end.
pub trait Console: MoveSource + Announcer + RematchPrompt {}

impl<T: MoveSource + Announcer + RematchPrompt> Console for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    #[test]
    fn test_player_names_by_mark() {
        let players = Players::new("Ada", "Grace");
        assert_eq!(players.name(Mark::First), "Ada");
        assert_eq!(players.name(Mark::Second), "Grace");
        assert_eq!(players.second(), "Grace");
    }

    #[test]
    fn test_rejection_kinds() {
        let occupied = Rejection::from(MoveError::SquareOccupied(Coord::new(0, 0)));
        assert!(occupied.is_occupied());

        let malformed = Rejection::from(MalformedInput::WrongTokenCount(1));
        assert!(!malformed.is_occupied());
        assert_eq!(malformed.to_string(), "expected two coordinates, found 1 token(s)");
    }

    #[test]
    fn test_eof_maps_to_input_closed() {
        let err = ConsoleError::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(matches!(err, ConsoleError::InputClosed));
    }
}
