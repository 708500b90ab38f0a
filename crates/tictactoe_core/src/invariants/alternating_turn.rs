//! Alternating turn invariant: the first mark plays even turns, the second odd.

use super::super::{GameInProgress, Mark};
use super::Invariant;

/// Invariant: marks in the history follow turn parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.history()
            .iter()
            .enumerate()
            .all(|(turn, mov)| mov.mark == Mark::for_turn(turn))
    }

    fn description() -> &'static str {
        "Marks alternate turns (first, second, first, ...)"
    }
}
