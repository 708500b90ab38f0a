//! Startup settings: TOML file first, then command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::{
    BoardSize, ConfigError, GameConfig, MarkSymbols, DEFAULT_FIRST_MARK, DEFAULT_SECOND_MARK,
};
use tracing::{debug, info, instrument};

/// Console settings, fixed once the session starts.
///
/// ```toml
/// board_size = 4
/// first_mark = "X"
/// second_mark = "O"
/// clear_screen = true
/// log_file = "tictactoe.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Board side length.
    board_size: BoardSize,
    /// Glyph of the first player.
    first_mark: char,
    /// Glyph of the second player.
    second_mark: char,
    /// Clear the terminal before each board render.
    clear_screen: bool,
    /// Where log lines go.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            first_mark: DEFAULT_FIRST_MARK,
            second_mark: DEFAULT_SECOND_MARK,
            clear_screen: true,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(board_size = %settings.board_size, "Settings loaded successfully");
        Ok(settings)
    }

    /// Reads the file named by `--config` when it exists, then applies flags.
    #[instrument(skip(cli), fields(config = %cli.config.display()))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = if cli.config.exists() {
            Self::from_file(&cli.config)?
        } else {
            debug!("Settings file not found, using defaults");
            Self::default()
        };
        settings.apply(cli)?;
        Ok(settings)
    }

    /// Overrides fields with any flags given on the command line.
    #[instrument(skip_all)]
    pub fn apply(&mut self, cli: &Cli) -> Result<(), ConfigError> {
        if let Some(n) = cli.size {
            self.board_size = BoardSize::new(n)?;
        }
        if let Some(mark) = cli.first_mark {
            self.first_mark = mark;
        }
        if let Some(mark) = cli.second_mark {
            self.second_mark = mark;
        }
        if cli.no_clear {
            self.clear_screen = false;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        Ok(())
    }

    /// Validates the marks and builds the immutable game configuration.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let marks = MarkSymbols::new(self.first_mark, self.second_mark)?;
        Ok(GameConfig::new(self.board_size, marks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn write_settings(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_build_standard_game() {
        let config = Settings::default().game_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_file_partial() {
        let file = write_settings("board_size = 5\nfirst_mark = \"A\"\n");
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.board_size().get(), 5);
        assert_eq!(*settings.first_mark(), 'A');
        assert_eq!(*settings.second_mark(), 'O');
        assert!(*settings.clear_screen());
    }

    #[test]
    fn test_zero_board_size_in_file_rejected() {
        let file = write_settings("board_size = 0\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse settings"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_settings("colour = \"red\"\n");
        assert!(Settings::from_file(file.path()).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_settings("board_size = 5\nclear_screen = true\n");
        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            path.as_str(),
            "--size",
            "4",
            "--no-clear",
        ]);

        let settings = Settings::load(&cli).unwrap();

        assert_eq!(settings.board_size().get(), 4);
        assert!(!*settings.clear_screen());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cli = Cli::parse_from(["tictactoe", "--config", path.to_str().unwrap()]);
        assert_eq!(Settings::load(&cli).unwrap(), Settings::default());
    }

    #[test]
    fn test_flag_size_zero_rejected() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "/nonexistent/tictactoe.toml",
            "--size",
            "0",
        ]);
        assert!(Settings::load(&cli).is_err());
    }

    #[test]
    fn test_flag_size_too_large_rejected() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "/nonexistent/tictactoe.toml",
            "--size",
            "5000000000",
        ]);
        let err = Settings::load(&cli).unwrap_err();
        assert!(err.message.contains("exceeds the maximum"));
    }

    #[test]
    fn test_file_size_too_large_rejected() {
        let file = write_settings("board_size = 100000\n");
        assert!(Settings::from_file(file.path()).is_err());
    }

    #[test]
    fn test_same_marks_rejected() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "/nonexistent/tictactoe.toml",
            "--first-mark",
            "O",
        ]);
        let settings = Settings::load(&cli).unwrap();
        assert!(settings.game_config().is_err());
    }
}
