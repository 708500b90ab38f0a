//! Balanced marks invariant: counts of the two marks differ by at most one.

use super::super::{GameInProgress, Mark};
use super::Invariant;
use tracing::warn;

/// Invariant: the mark counts on the board differ by at most one.
pub struct BalancedMarksInvariant;

impl Invariant<GameInProgress> for BalancedMarksInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let first = game.board().count(Mark::First);
        let second = game.board().count(Mark::Second);

        let valid = first.abs_diff(second) <= 1;
        if !valid {
            warn!(first, second, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
