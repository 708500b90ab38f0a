//! Core domain types for tic-tac-toe.

use super::config::{BoardSize, MarkSymbols};
use super::position::Coord;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two marks a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Mark {
    /// Moves on even turn indices (goes first).
    First,
    /// Moves on odd turn indices.
    Second,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// Mark that plays on the given turn index.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 { Mark::First } else { Mark::Second }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// N×N tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Side length as a validated size.
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Number of cells.
    pub fn cells(&self) -> usize {
        self.squares.len()
    }

    /// Whether the coordinate lies on this board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row() < self.size() && coord.col() < self.size()
    }

    /// Gets the square at a coordinate, or `None` if it is off the board.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        if !self.contains(coord) {
            return None;
        }
        self.squares.get(coord.index(self.size())).copied()
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Square::Empty))
    }

    /// Overwrites a square. The coordinate must be on the board.
    pub fn set(&mut self, coord: Coord, square: Square) {
        debug_assert!(
            self.contains(coord),
            "{} is off a {}x{} board",
            coord,
            self.size(),
            self.size()
        );
        let index = coord.index(self.size());
        self.squares[index] = square;
    }

    /// Places a mark. The caller has already validated range and occupancy.
    pub fn place(&mut self, coord: Coord, mark: Mark) {
        self.set(coord, Square::Occupied(mark));
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Squares of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Square> + '_ {
        let n = self.size();
        self.squares[row * n..(row + 1) * n].iter().copied()
    }

    /// Squares of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Square> + '_ {
        let n = self.size();
        (0..n).map(move |row| self.squares[row * n + col])
    }

    /// Top-left to bottom-right.
    pub fn main_diagonal(&self) -> impl Iterator<Item = Square> + '_ {
        let n = self.size();
        (0..n).map(move |i| self.squares[i * n + i])
    }

    /// Top-right to bottom-left.
    pub fn anti_diagonal(&self) -> impl Iterator<Item = Square> + '_ {
        let n = self.size();
        (0..n).map(move |i| self.squares[i * n + (n - 1 - i)])
    }

    /// Number of squares holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Formats the board as a text grid.
    ///
    /// Cells are separated by `|` and rows by `---` segments joined with `+`:
    ///
    /// ```text
    ///  X | O | X
    /// ---+---+---
    ///    | X |
    /// ```
    #[instrument(skip(self, marks), fields(size = self.size()))]
    pub fn render(&self, marks: &MarkSymbols) -> String {
        let n = self.size();
        let separator = vec!["---"; n].join("+");
        let mut result = String::new();
        for row in 0..n {
            let cells: Vec<String> = self
                .row(row)
                .map(|square| format!(" {}", marks.glyph(square)))
                .collect();
            result.push_str(&cells.join(" |"));
            result.push('\n');
            if row + 1 < n {
                result.push_str(&separator);
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        for n in 1..=6 {
            let board = Board::new(size(n));
            assert_eq!(board.cells(), n * n);
            assert!(board.squares().iter().all(|s| *s == Square::Empty));
        }
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::default();
        assert_eq!(board.get(Coord::new(3, 0)), None);
        assert_eq!(board.get(Coord::new(0, 3)), None);
        assert!(!board.is_empty(Coord::new(2, 5)));
    }

    #[test]
    fn test_place_and_count() {
        let mut board = Board::default();
        board.place(Coord::new(0, 2), Mark::First);
        board.place(Coord::new(2, 0), Mark::Second);
        assert_eq!(board.get(Coord::new(0, 2)), Some(Square::Occupied(Mark::First)));
        assert_eq!(board.count(Mark::First), 1);
        assert_eq!(board.count(Mark::Second), 1);
        assert_eq!(board.filled(), 2);
        assert!(!board.is_full());
    }

    #[test]
    fn test_lines() {
        let mut board = Board::new(size(3));
        board.place(Coord::new(0, 2), Mark::First);
        let anti: Vec<_> = board.anti_diagonal().collect();
        assert_eq!(anti[0], Square::Occupied(Mark::First));
        let col: Vec<_> = board.column(2).collect();
        assert_eq!(col[0], Square::Occupied(Mark::First));
        assert_eq!(board.main_diagonal().filter(|s| *s != Square::Empty).count(), 0);
    }

    #[test]
    fn test_render_3x3() {
        let mut board = Board::default();
        board.place(Coord::new(0, 0), Mark::First);
        board.place(Coord::new(1, 1), Mark::Second);
        let expected = " X |   |  \n---+---+---\n   | O |  \n---+---+---\n   |   |  \n";
        assert_eq!(board.render(&MarkSymbols::default()), expected);
    }

    #[test]
    fn test_render_single_cell() {
        let mut board = Board::new(size(1));
        board.place(Coord::new(0, 0), Mark::Second);
        assert_eq!(board.render(&MarkSymbols::default()), " O\n");
    }

    #[test]
    fn test_turn_parity() {
        assert_eq!(Mark::for_turn(0), Mark::First);
        assert_eq!(Mark::for_turn(1), Mark::Second);
        assert_eq!(Mark::for_turn(2), Mark::First);
        assert_eq!(Mark::First.opponent(), Mark::Second);
    }
}
