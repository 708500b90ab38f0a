//! Tic-tac-toe core - board, win detection and turn management
//!
//! This library holds the game rules for a two-player console tic-tac-toe
//! on an N×N board. Everything that talks to a human (reading lines,
//! clearing the screen, asking for names) sits behind the collaborator
//! traits in [`MoveSource`], [`Announcer`] and [`RematchPrompt`].
//!
//! # Architecture
//!
//! - **Board**: N×N grid of [`Square`]s
//! - **Validator**: range and occupancy checks for proposed coordinates
//! - **Rules**: row, column and diagonal scans combined into an [`Outcome`]
//! - **Typestate**: [`GameSetup`] → [`GameInProgress`] → [`GameFinished`]
//! - **Session**: rematch loop with a running [`Scoreboard`]
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Coord, GameConfig, GameResult, GameSetup, Mark};
//!
//! let game = GameSetup::new(GameConfig::default()).start();
//! assert_eq!(game.to_move(), Mark::First);
//!
//! match game.make_move(Coord::new(1, 1)).unwrap() {
//!     GameResult::InProgress(game) => assert_eq!(game.to_move(), Mark::Second),
//!     GameResult::Finished(_) => unreachable!("one move cannot finish a 3x3 game"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod console;
mod contracts;
mod invariants;
mod phases;
mod position;
mod round;
mod rules;
mod session;
mod types;
mod typestate;
mod validator;

// Crate-level exports - Configuration
pub use config::{
    BoardSize, ConfigError, GameConfig, MarkSymbols, DEFAULT_FIRST_MARK, DEFAULT_SECOND_MARK,
    DEFAULT_SIZE, MAX_SIZE,
};

// Crate-level exports - Board and moves
pub use action::{Move, MoveError};
pub use position::Coord;
pub use types::{Board, Mark, Square};
pub use validator::{is_valid, validate};

// Crate-level exports - Rules
pub use phases::Outcome;
pub use rules::{
    check_columns, check_diagonals, check_rows, evaluate, is_draw, is_full, winning_line, Line,
};

// Crate-level exports - Game loop
pub use contracts::{Contract, InBounds, LegalMove, MoveContract, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TicTacToeInvariants,
};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

// Crate-level exports - Collaborators, rounds and sessions
pub use console::{
    Announcer, Console, ConsoleError, MalformedInput, MoveSource, Players, Proposal, Rejection,
    RematchPrompt, RoundEvent,
};
pub use round::{play_round, PlayError};
pub use session::{Scoreboard, Session};
