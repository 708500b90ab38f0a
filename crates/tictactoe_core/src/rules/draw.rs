//! Draw detection logic.

use super::super::Board;
use super::win::winning_line;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A round is drawn once every square has been played and no line is complete.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, turns_played: usize) -> bool {
    turns_played >= board.cells() && winning_line(board).is_none()
}
