//! Move validation for raw (possibly negative) coordinates.

use super::action::MoveError;
use super::position::Coord;
use super::types::Board;
use tracing::{debug, instrument};

/// Checks a proposed coordinate against the board.
///
/// Returns the coordinate when it is in range and the square is empty.
/// Out-of-range and occupied squares are distinct error kinds so the
/// console can word them differently.
#[instrument(skip(board), fields(size = board.size()))]
pub fn validate(board: &Board, row: i64, col: i64) -> Result<Coord, MoveError> {
    let size = board.size();
    let in_range = |v: i64| usize::try_from(v).ok().filter(|v| *v < size);

    let (Some(r), Some(c)) = (in_range(row), in_range(col)) else {
        debug!("Coordinate out of range");
        return Err(MoveError::OutOfRange { row, col, size });
    };

    let coord = Coord::new(r, c);
    if !board.is_empty(coord) {
        debug!(%coord, "Square occupied");
        return Err(MoveError::SquareOccupied(coord));
    }

    Ok(coord)
}

/// Whether a proposed coordinate can be played.
pub fn is_valid(board: &Board, row: i64, col: i64) -> bool {
    validate(board, row, col).is_ok()
}
