//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameInProgress, Square};
use super::Invariant;

/// Invariant: the board is exactly the replay of the move history.
///
/// Every recorded move must land on a square that was empty at the time,
/// and the turn counter must match the history length.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        if game.history().len() != game.turns() {
            return false;
        }

        let mut reconstructed = Board::new(game.board().board_size());
        for mov in game.history() {
            if reconstructed.get(mov.coord) != Some(Square::Empty) {
                return false;
            }
            reconstructed.place(mov.coord, mov.mark);
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
