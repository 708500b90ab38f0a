//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::typestate::GameInProgress;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the coordinate lies on the board.
pub struct InBounds;

impl InBounds {
    /// Checks that the move's coordinate is on the board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().contains(mov.coord) {
            return Ok(());
        }
        Err(MoveError::OutOfRange {
            row: mov.coord.row() as i64,
            col: mov.coord.col() as i64,
            size: game.board().size(),
        })
    }
}

/// Precondition: the square at the move's coordinate must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that the target square is empty.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.coord) {
            Err(MoveError::SquareOccupied(mov.coord))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if it is on the board and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        InBounds::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Coordinate on the board
/// - Square empty
///
/// Postconditions:
/// - Turn counter advanced by exactly one
/// - Board remains monotonic
/// - Marks alternate and stay balanced
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if after.turns() != before.turns() + 1 {
            warn!(before = before.turns(), after = after.turns(), "Turn counter skipped");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: turn counter went from {} to {}",
                before.turns(),
                after.turns()
            )));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
