//! Board coordinates.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, column) pair on the board, both counted from zero.
///
/// A `Coord` says nothing about a particular board by itself; use
/// [`crate::validate`] to turn raw user input into a coordinate that is known
/// to be on the board and unoccupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index on a board of the given side length.
    pub(crate) fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Every coordinate on the board that is still empty, in row-major order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Coord> {
        let n = board.size();
        (0..n)
            .flat_map(|row| (0..n).map(move |col| Coord::new(row, col)))
            .filter(|coord| board.is_empty(*coord))
            .collect()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
