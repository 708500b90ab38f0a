//! Immutable game configuration: board size and the two mark glyphs.

use super::types::{Mark, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board side length used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 3;
/// Largest accepted board side length.
pub const MAX_SIZE: usize = 100;
/// Glyph for the mark that moves first.
pub const DEFAULT_FIRST_MARK: char = 'X';
/// Glyph for the mark that moves second.
pub const DEFAULT_SECOND_MARK: char = 'O';

/// Side length of a square board, from 1 to [`MAX_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "usize", into = "usize")]
#[display("{_0}")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Creates a board size, rejecting zero and anything above [`MAX_SIZE`].
    #[instrument]
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::new("Board size must be a positive integer"));
        }
        if n > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} exceeds the maximum of {}",
                n, MAX_SIZE
            )));
        }
        Ok(Self(n))
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the number of cells on the board (N*N). Bounded by `MAX_SIZE * MAX_SIZE`.
    pub fn cells(self) -> usize {
        self.0 * self.0
    }

    /// Largest valid coordinate value.
    pub fn max_index(self) -> usize {
        self.0 - 1
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(DEFAULT_SIZE)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// The glyphs drawn for each mark.
///
/// Both glyphs must be non-blank (an empty cell renders as a space) and
/// distinct from each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkSymbols {
    first: char,
    second: char,
}

impl MarkSymbols {
    /// Creates a validated pair of mark glyphs.
    #[instrument]
    pub fn new(first: char, second: char) -> Result<Self, ConfigError> {
        if first.is_whitespace() || second.is_whitespace() {
            return Err(ConfigError::new("Mark symbols must not be blank"));
        }
        if first == second {
            return Err(ConfigError::new(format!(
                "Mark symbols must be distinct (both are '{}')",
                first
            )));
        }
        Ok(Self { first, second })
    }

    /// Glyph of the first mark.
    pub fn first(&self) -> char {
        self.first
    }

    /// Glyph of the second mark.
    pub fn second(&self) -> char {
        self.second
    }

    /// Glyph for a mark.
    pub fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::First => self.first,
            Mark::Second => self.second,
        }
    }

    /// Glyph for a square; empty squares are a space.
    pub fn glyph(&self, square: Square) -> char {
        match square {
            Square::Empty => ' ',
            Square::Occupied(mark) => self.symbol(mark),
        }
    }
}

impl Default for MarkSymbols {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST_MARK,
            second: DEFAULT_SECOND_MARK,
        }
    }
}

/// Configuration fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GameConfig {
    size: BoardSize,
    marks: MarkSymbols,
}

impl GameConfig {
    /// Creates a configuration from validated parts.
    #[instrument]
    pub fn new(size: BoardSize, marks: MarkSymbols) -> Self {
        Self { size, marks }
    }

    /// Board side length.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Mark glyphs.
    pub fn marks(&self) -> &MarkSymbols {
        &self.marks
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
