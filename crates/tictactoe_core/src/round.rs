//! Drives one round from an empty board to a win or a draw.

use super::action::{Move, MoveError};
use super::config::GameConfig;
use super::console::{
    Announcer, ConsoleError, MoveSource, Players, Proposal, Rejection, RoundEvent,
};
use super::typestate::{GameFinished, GameResult, GameSetup};
use derive_more::{Display, From};
use tracing::{debug, info, instrument};

/// Why a round or session stopped before a natural end.
#[derive(Debug, Display, From)]
pub enum PlayError {
    /// The console failed or its input ended.
    #[display("{_0}")]
    Console(ConsoleError),
    /// A validated move was refused by the move contract.
    #[display("{_0}")]
    Move(MoveError),
}

impl PlayError {
    /// True when the players simply stopped typing (end of input).
    pub fn is_input_closed(&self) -> bool {
        matches!(self, PlayError::Console(ConsoleError::InputClosed))
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Console(e) => Some(e),
            PlayError::Move(e) => Some(e),
        }
    }
}

/// Plays a single round.
///
/// Each turn the source is asked for a proposal. Malformed, out-of-range and
/// occupied proposals are announced as rejections and the same player is
/// asked again; nothing changes on the board. An accepted coordinate is
/// placed with the mark given by turn parity and the board is evaluated.
#[instrument(skip_all, fields(size = %config.size()))]
pub fn play_round<C>(
    config: GameConfig,
    players: &Players,
    console: &mut C,
) -> Result<GameFinished, PlayError>
where
    C: MoveSource + Announcer,
{
    let mut game = GameSetup::new(config).start();
    info!("Round started");

    loop {
        let mark = game.to_move();
        let player = players.name(mark);
        console.announce(&RoundEvent::TurnStarted { game: &game, player })?;

        let rejection = match console.next_move(&game)? {
            Proposal::Coordinates { row, col } => match game.validate(row, col) {
                Ok(coord) => {
                    game = match game.make_move(coord)? {
                        GameResult::InProgress(next) => next,
                        GameResult::Finished(done) => {
                            let winner = done.outcome().winner().map(|m| players.name(m));
                            console.announce(&RoundEvent::RoundOver { game: &done, winner })?;
                            return Ok(done);
                        }
                    };
                    let mv = Move::new(mark, coord);
                    debug!(%mv, player, "Move played");
                    console.announce(&RoundEvent::MovePlayed { mv, player })?;
                    continue;
                }
                Err(e) => Rejection::Move(e),
            },
            Proposal::Malformed(input) => Rejection::Malformed(input),
        };

        debug!(%rejection, player, "Proposal rejected");
        console.announce(&RoundEvent::MoveRejected {
            game: &game,
            reason: &rejection,
        })?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameInProgress, MalformedInput, Mark, Outcome};
    use std::collections::VecDeque;

    /// Feeds canned proposals and records what was announced.
    #[derive(Default)]
    struct Script {
        proposals: VecDeque<Proposal>,
        rejections: Vec<Rejection>,
        played: Vec<Move>,
        turns_announced: usize,
        finished: bool,
    }

    impl Script {
        fn new(proposals: impl IntoIterator<Item = Proposal>) -> Self {
            Self {
                proposals: proposals.into_iter().collect(),
                ..Default::default()
            }
        }
    }

    fn at(row: i64, col: i64) -> Proposal {
        Proposal::Coordinates { row, col }
    }

    impl MoveSource for Script {
        fn next_move(&mut self, _game: &GameInProgress) -> Result<Proposal, ConsoleError> {
            self.proposals.pop_front().ok_or(ConsoleError::InputClosed)
        }
    }

    impl Announcer for Script {
        fn announce(&mut self, event: &RoundEvent<'_>) -> Result<(), ConsoleError> {
            match event {
                RoundEvent::TurnStarted { .. } => self.turns_announced += 1,
                RoundEvent::MoveRejected { reason, .. } => self.rejections.push((*reason).clone()),
                RoundEvent::MovePlayed { mv, .. } => self.played.push(*mv),
                RoundEvent::RoundOver { .. } => self.finished = true,
            }
            Ok(())
        }
    }

    #[test]
    fn test_row_win_after_five_moves() {
        let players = Players::new("Ann", "Bob");
        let mut script = Script::new([at(0, 0), at(1, 1), at(0, 1), at(1, 0), at(0, 2)]);

        let done = play_round(GameConfig::default(), &players, &mut script).unwrap();

        assert_eq!(done.outcome(), Outcome::Won(Mark::First));
        assert_eq!(done.turns(), 5);
        assert_eq!(script.played.len(), 4);
        assert!(script.finished);
    }

    #[test]
    fn test_rejections_do_not_advance_turn() {
        let players = Players::new("Ann", "Bob");
        let mut script = Script::new([
            at(1, 1),
            Proposal::Malformed(MalformedInput::NotAnInteger("x".into())),
            at(-1, 0),
            at(1, 1),
            at(0, 0),
        ]);

        let err = play_round(GameConfig::default(), &players, &mut script).unwrap_err();

        assert!(err.is_input_closed());
        assert_eq!(script.rejections.len(), 3);
        assert!(script.rejections[2].is_occupied());
        let marks: Vec<_> = script.played.iter().map(|m| m.mark).collect();
        assert_eq!(marks, vec![Mark::First, Mark::Second]);
    }
}
