//! Evaluated game outcome.

use super::Mark;
use serde::{Deserialize, Serialize};

/// The state of a round after a move.
///
/// Derived from the board and the turn counter every time; never stored as
/// the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Every square is filled and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the round ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true for a won or drawn round.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "{:?} mark wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
