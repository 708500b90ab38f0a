//! First-class move types.
//!
//! A move records which mark was placed where. Moves are built by the game
//! loop from the turn counter, so a move can never carry the wrong mark.

use super::{Coord, Mark};
use serde::{Deserialize, Serialize};

/// A mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, coord: Coord) -> Self {
        Self { mark, coord }
    }

    /// Returns the mark of this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the coordinate of this move.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.mark, self.coord)
    }
}

/// Why a proposed coordinate cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column falls outside `[0, size)`.
    #[display("Coordinate ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange {
        /// Proposed row.
        row: i64,
        /// Proposed column.
        col: i64,
        /// Board side length.
        size: usize,
    },

    /// The square is already taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Coord),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
