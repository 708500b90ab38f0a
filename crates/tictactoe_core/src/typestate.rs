//! Phase-specific typestate structs for a single round.
//!
//! Each phase is its own type. A `GameFinished` ALWAYS has an outcome; a
//! `GameInProgress` is the only phase that accepts moves.

use super::action::{Move, MoveError};
use super::config::GameConfig;
use super::contracts::{Contract, MoveContract};
use super::phases::Outcome;
use super::rules::{self, Line};
use super::{Board, Coord, Mark};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round in setup phase - ready to start.
///
/// The board is always empty.
#[derive(Debug, Clone)]
pub struct GameSetup {
    config: GameConfig,
    board: Board,
}

impl GameSetup {
    /// Creates a round for the given configuration.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config.size()),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Starts the round with the turn counter at zero.
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            config: self.config,
            board: self.board,
            history: Vec::new(),
            turns: 0,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - awaiting a move.
///
/// The mark to move is derived from the turn counter alone.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) turns: usize,
}

impl GameInProgress {
    /// Checks a raw coordinate against the current board.
    #[instrument(skip(self))]
    pub fn validate(&self, row: i64, col: i64) -> Result<Coord, MoveError> {
        super::validator::validate(&self.board, row, col)
    }

    /// Places the current mark, consuming self and transitioning to the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (in range, square empty)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(turn = self.turns, mark = ?self.to_move()))]
    pub fn make_move(self, coord: Coord) -> Result<GameResult, MoveError> {
        let action = Move::new(self.to_move(), coord);

        // Precondition: Check contract
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.place(coord, action.mark);
        game.history.push(action);
        game.turns += 1;
        debug!(%action, turns = game.turns, "Move applied");

        // Postcondition: Verify contract in debug builds
        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        let outcome = rules::evaluate(&game.board, game.turns);
        if !outcome.is_terminal() {
            return Ok(GameResult::InProgress(game));
        }

        let line = rules::winning_line(&game.board).map(|(line, _)| line);
        info!(%outcome, ?line, turns = game.turns, "Round finished");
        Ok(GameResult::Finished(GameFinished {
            config: game.config,
            board: game.board,
            history: game.history,
            turns: game.turns,
            outcome,
            line,
        }))
    }

    /// Mark that plays the next move (even turns first, odd turns second).
    pub fn to_move(&self) -> Mark {
        Mark::for_turn(self.turns)
    }

    /// Number of moves applied so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty squares.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Coord> {
        Coord::valid_moves(&self.board)
    }

    /// Replays coordinates from an empty board.
    ///
    /// Marks follow turn parity. Coordinates after a finishing move are ignored.
    #[instrument(skip(coords), fields(moves = coords.len()))]
    pub fn replay(config: GameConfig, coords: &[Coord]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new(config).start();

        for coord in coords {
            match game.make_move(*coord)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - outcome determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    config: GameConfig,
    board: Board,
    history: Vec<Move>,
    turns: usize,
    outcome: Outcome,
    line: Option<Line>,
}

impl GameFinished {
    /// Returns the outcome (won or drawn).
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The completed line, if the round was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.line
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves played in the round.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Starts over with a fresh board and the same configuration.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new(self.config)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Round continues.
    InProgress(GameInProgress),
    /// Round finished.
    Finished(GameFinished),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(usize, usize)]) -> Vec<Coord> {
        pairs.iter().map(|(r, c)| Coord::new(*r, *c)).collect()
    }

    #[test]
    fn test_start_is_empty() {
        let game = GameSetup::default().start();
        assert_eq!(game.turns(), 0);
        assert_eq!(game.to_move(), Mark::First);
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_parity_places_marks() {
        let result =
            GameInProgress::replay(GameConfig::default(), &coords(&[(0, 0), (1, 1), (2, 2)]));
        let GameResult::InProgress(game) = result.unwrap() else {
            panic!("Expected in-progress game");
        };
        let marks: Vec<_> = game.history().iter().map(|m| m.mark).collect();
        assert_eq!(marks, vec![Mark::First, Mark::Second, Mark::First]);
        assert_eq!(game.to_move(), Mark::Second);
    }

    #[test]
    fn test_occupied_rejected() {
        let result = GameInProgress::replay(GameConfig::default(), &coords(&[(1, 1), (1, 1)]));
        assert_eq!(
            result.unwrap_err(),
            MoveError::SquareOccupied(Coord::new(1, 1))
        );
    }

    #[test]
    fn test_off_board_rejected() {
        let game = GameSetup::default().start();
        assert!(matches!(
            game.make_move(Coord::new(0, 3)),
            Err(MoveError::OutOfRange { row: 0, col: 3, size: 3 })
        ));
    }

    #[test]
    fn test_restart_keeps_config() {
        let result = GameInProgress::replay(
            GameConfig::default(),
            &coords(&[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]),
        );
        let GameResult::Finished(done) = result.unwrap() else {
            panic!("Expected finished game");
        };
        assert_eq!(done.winning_line(), Some(Line::Row(0)));
        let fresh = done.restart().start();
        assert_eq!(fresh.turns(), 0);
        assert!(fresh.history().is_empty());
    }
}
