//! Session controller: rounds repeated until a rematch is declined.

use super::config::GameConfig;
use super::console::{Console, Players};
use super::phases::Outcome;
use super::round::{play_round, PlayError};
use super::Mark;
use derive_getters::Getters;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// Results of the rounds played so far in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Scoreboard {
    /// Rounds won by the first mark.
    first_wins: usize,
    /// Rounds won by the second mark.
    second_wins: usize,
    /// Drawn rounds.
    draws: usize,
}

impl Scoreboard {
    /// Counts a finished round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::First) => self.first_wins += 1,
            Outcome::Won(Mark::Second) => self.second_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Rounds won by a mark.
    pub fn wins(&self, mark: Mark) -> usize {
        match mark {
            Mark::First => self.first_wins,
            Mark::Second => self.second_wins,
        }
    }

    /// Wins per mark, first mark first.
    pub fn tally(&self) -> impl Iterator<Item = (Mark, usize)> + '_ {
        Mark::iter().map(|mark| (mark, self.wins(mark)))
    }

    /// Total rounds recorded.
    pub fn rounds(&self) -> usize {
        self.first_wins + self.second_wins + self.draws
    }
}

/// Two named players sharing one configuration across rematches.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    players: Players,
    scoreboard: Scoreboard,
}

impl Session {
    /// Creates a session. Names and configuration never change afterwards.
    #[instrument]
    pub fn new(config: GameConfig, players: Players) -> Self {
        Self {
            config,
            players,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Player names.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Results so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Plays rounds until the rematch prompt answers no.
    ///
    /// Every round starts from a fresh board and a zero turn counter. If the
    /// console fails mid-round the error is returned and the scoreboard keeps
    /// the rounds completed before it.
    #[instrument(skip_all)]
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<Scoreboard, PlayError> {
        loop {
            let finished = play_round(self.config, &self.players, console)?;
            self.scoreboard.record(finished.outcome());
            info!(
                outcome = %finished.outcome(),
                rounds = self.scoreboard.rounds(),
                "Round recorded"
            );

            if !console.rematch()? {
                info!("Rematch declined, session over");
                return Ok(self.scoreboard);
            }
        }
    }
}
