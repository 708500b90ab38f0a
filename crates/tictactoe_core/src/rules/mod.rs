//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are separated from board storage
//! so the typestate engine and the contracts can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_columns, check_diagonals, check_rows, winning_line, Line};

use super::{Board, Outcome};
use tracing::{debug, instrument};

/// Evaluates the board after `turns_played` moves.
///
/// Rows are scanned first, then columns, then diagonals. With no winner the
/// round is a draw once `turns_played` reaches N*N, otherwise still in
/// progress.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board, turns_played: usize) -> Outcome {
    let winner = check_rows(board)
        .or_else(|| check_columns(board))
        .or_else(|| check_diagonals(board));

    let outcome = match winner {
        Some(mark) => Outcome::Won(mark),
        None if turns_played >= board.cells() => Outcome::Draw,
        None => Outcome::InProgress,
    };
    debug!(%outcome, "Board evaluated");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Coord, Mark};

    #[test]
    fn test_empty_board_in_progress() {
        for n in 1..=6 {
            let board = Board::new(BoardSize::new(n).unwrap());
            assert_eq!(evaluate(&board, 0), Outcome::InProgress);
        }
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(BoardSize::new(1).unwrap());
        board.place(Coord::new(0, 0), Mark::First);
        assert_eq!(evaluate(&board, 1), Outcome::Won(Mark::First));
    }

    #[test]
    fn test_full_board_draw() {
        use crate::Mark::{First as A, Second as B};
        let pattern = [[A, B, A], [A, B, B], [B, A, A]];
        let mut board = Board::default();
        for (r, row) in pattern.iter().enumerate() {
            for (c, mark) in row.iter().enumerate() {
                board.place(Coord::new(r, c), *mark);
            }
        }
        assert_eq!(evaluate(&board, 9), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        use crate::Mark::{First as A, Second as B};
        let pattern = [[A, B, A], [B, A, B], [B, A, A]];
        let mut board = Board::default();
        for (r, row) in pattern.iter().enumerate() {
            for (c, mark) in row.iter().enumerate() {
                board.place(Coord::new(r, c), *mark);
            }
        }
        assert_eq!(evaluate(&board, 9), Outcome::Won(A));
    }
}
