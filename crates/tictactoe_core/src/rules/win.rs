//! Win detection: row, column and diagonal scans.

use super::super::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row by index.
    Row(usize),
    /// Column by index.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {}", r),
            Line::Column(c) => write!(f, "column {}", c),
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// The mark filling every square of a line, if any.
fn uniform(mut squares: impl Iterator<Item = Square>) -> Option<Mark> {
    let Square::Occupied(first) = squares.next()? else {
        return None;
    };
    squares
        .all(|square| square == Square::Occupied(first))
        .then_some(first)
}

fn row_win(board: &Board) -> Option<(Line, Mark)> {
    (0..board.size()).find_map(|r| uniform(board.row(r)).map(|mark| (Line::Row(r), mark)))
}

fn column_win(board: &Board) -> Option<(Line, Mark)> {
    (0..board.size()).find_map(|c| uniform(board.column(c)).map(|mark| (Line::Column(c), mark)))
}

fn diagonal_win(board: &Board) -> Option<(Line, Mark)> {
    uniform(board.main_diagonal())
        .map(|mark| (Line::MainDiagonal, mark))
        .or_else(|| uniform(board.anti_diagonal()).map(|mark| (Line::AntiDiagonal, mark)))
}

/// Scans rows in index order; the first complete row wins.
#[instrument(skip(board))]
pub fn check_rows(board: &Board) -> Option<Mark> {
    row_win(board).map(|(_, mark)| mark)
}

/// Scans columns in index order; the first complete column wins.
#[instrument(skip(board))]
pub fn check_columns(board: &Board) -> Option<Mark> {
    column_win(board).map(|(_, mark)| mark)
}

/// Checks the main diagonal, then the anti-diagonal.
#[instrument(skip(board))]
pub fn check_diagonals(board: &Board) -> Option<Mark> {
    diagonal_win(board).map(|(_, mark)| mark)
}

/// Returns the first complete line and its mark.
///
/// Priority is rows, then columns, then diagonals. Only a hand-seeded board
/// can hold more than one complete line, but the order stays fixed.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    row_win(board)
        .or_else(|| column_win(board))
        .or_else(|| diagonal_win(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Coord};

    fn board(n: usize) -> Board {
        Board::new(BoardSize::new(n).unwrap())
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = board(3);
        assert_eq!(check_rows(&board), None);
        assert_eq!(check_columns(&board), None);
        assert_eq!(check_diagonals(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_row_wins() {
        for n in 1..=5 {
            for r in 0..n {
                let mut b = board(n);
                for c in 0..n {
                    b.place(Coord::new(r, c), Mark::First);
                }
                assert_eq!(check_rows(&b), Some(Mark::First), "row {} of {}", r, n);
                assert_eq!(winning_line(&b), Some((Line::Row(r), Mark::First)));
            }
        }
    }

    #[test]
    fn test_every_column_wins() {
        for n in 2..=5 {
            for c in 0..n {
                let mut b = board(n);
                for r in 0..n {
                    b.place(Coord::new(r, c), Mark::First);
                }
                assert_eq!(check_rows(&b), None);
                assert_eq!(check_columns(&b), Some(Mark::First), "column {} of {}", c, n);
                assert_eq!(winning_line(&b), Some((Line::Column(c), Mark::First)));
            }
        }
    }

    #[test]
    fn test_main_diagonal_second_mark() {
        let mut b = board(4);
        for i in 0..4 {
            b.place(Coord::new(i, i), Mark::Second);
        }
        assert_eq!(check_diagonals(&b), Some(Mark::Second));
        assert_eq!(winning_line(&b), Some((Line::MainDiagonal, Mark::Second)));
    }

    #[test]
    fn test_anti_diagonal_first_mark() {
        let mut b = board(3);
        for i in 0..3 {
            b.place(Coord::new(i, 2 - i), Mark::First);
        }
        assert_eq!(check_diagonals(&b), Some(Mark::First));
        assert_eq!(winning_line(&b), Some((Line::AntiDiagonal, Mark::First)));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut b = board(3);
        b.place(Coord::new(0, 0), Mark::First);
        b.place(Coord::new(0, 1), Mark::Second);
        b.place(Coord::new(0, 2), Mark::First);
        assert_eq!(check_rows(&b), None);
    }

    fn seeded(cells: &[(usize, usize, Mark)]) -> Board {
        let mut b = board(3);
        for (r, c, mark) in cells {
            b.place(Coord::new(*r, *c), *mark);
        }
        b
    }

    #[test]
    fn test_row_reported_before_column() {
        use crate::Mark::First as F;
        let b = seeded(&[(0, 0, F), (0, 1, F), (0, 2, F), (1, 0, F), (2, 0, F)]);
        assert_eq!(winning_line(&b), Some((Line::Row(0), F)));
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        use crate::Mark::Second as S;
        let b = seeded(&[(0, 0, S), (1, 0, S), (2, 0, S), (1, 1, S), (2, 2, S)]);
        assert_eq!(winning_line(&b), Some((Line::Column(0), S)));
    }

    #[test]
    fn test_rows_scanned_in_index_order() {
        use crate::Mark::{First as F, Second as S};
        let b = seeded(&[
            (0, 0, S),
            (0, 1, S),
            (0, 2, S),
            (2, 0, F),
            (2, 1, F),
            (2, 2, F),
        ]);
        assert_eq!(check_rows(&b), Some(S));
    }
}
