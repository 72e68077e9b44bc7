use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Board, PieceColor, Side};

/// Settings shared by the TUI and the selfplay runner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub robot: RobotConfig,
    pub arena: ArenaConfig,
    pub ui: UiConfig,
}

/// Initial layout and turn order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Row-major cell codes: 0 empty, 1 white, 2 black.
    pub layout: Vec<u8>,
    pub first_mover: Side,
}

impl Default for BoardConfig {
    fn default() -> Self {
        #[rustfmt::skip]
        let layout = vec![
            2, 2, 2, 2,
            0, 0, 0, 0,
            0, 0, 0, 0,
            1, 1, 1, 1,
        ];
        BoardConfig {
            layout,
            first_mover: Side::White,
        }
    }
}

impl BoardConfig {
    /// Decode the layout into a board.
    pub fn initial_board(&self) -> Result<Board, ConfigError> {
        Ok(Board::from_layout(&self.layout)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// Fixed rng seed; drawn from the OS when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Engine ticks before a game is declared a draw.
    pub max_ticks: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 100,
            max_ticks: 400,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay between replayed actions on screen.
    pub animation_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { animation_ms: 250 }
    }
}

impl AppConfig {
    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Reject layouts a game can't start from and empty arena runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = self.board.initial_board()?;
        for color in [PieceColor::White, PieceColor::Black] {
            if board.count(color) < 2 {
                return Err(ConfigError::Validation(format!(
                    "board.layout needs at least 2 {color:?} pieces"
                )));
            }
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }
        if self.arena.max_ticks == 0 {
            return Err(ConfigError::Validation(
                "arena.max_ticks must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Defaults rendered as TOML.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[robot]
seed = 42
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.robot.seed, Some(42));
        assert_eq!(config.board.first_mover, Side::White);
        assert_eq!(config.arena.games, 100);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.board.layout, default.board.layout);
        assert_eq!(config.robot.seed, None);
        assert_eq!(config.ui.animation_ms, default.ui.animation_ms);
    }

    #[test]
    fn test_first_mover_parses_lowercase() {
        let config: AppConfig = toml::from_str("[board]\nfirst_mover = \"black\"\n").unwrap();
        assert_eq!(config.board.first_mover, Side::Black);
    }

    #[test]
    fn test_validation_rejects_short_layout() {
        let mut config = AppConfig::default();
        config.board.layout.pop();
        assert!(matches!(config.validate(), Err(ConfigError::Layout(_))));
    }

    #[test]
    fn test_validation_rejects_bad_cell_code() {
        let mut config = AppConfig::default();
        config.board.layout[4] = 5;
        assert!(matches!(config.validate(), Err(ConfigError::Layout(_))));
    }

    #[test]
    fn test_validation_rejects_lone_piece() {
        let mut config = AppConfig::default();
        config.board.layout = vec![0; 16];
        config.board.layout[0] = 2;
        config.board.layout[1] = 2;
        config.board.layout[15] = 1;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.arena.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_ticks() {
        let mut config = AppConfig::default();
        config.arena.max_ticks = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.arena.games, 100);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[arena]
games = 7
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.arena.games, 7);
        // Unset sections fall back
        assert_eq!(config.arena.max_ticks, 400);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nlayout = [1, 2]\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Layout(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
