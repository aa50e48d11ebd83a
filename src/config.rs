use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::game::{CONNECT_N, DEFAULT_COLS, DEFAULT_ROWS};

/// Who controls one side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Computer,
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "human" => Ok(PlayerKind::Human),
            "c" | "computer" => Ok(PlayerKind::Computer),
            other => Err(format!("unknown player kind '{other}' (expected 'human' or 'computer')")),
        }
    }
}

/// Board dimensions.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Controller assignment per side.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub red: PlayerKind,
    pub yellow: PlayerKind,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            red: PlayerKind::Human,
            yellow: PlayerKind::Computer,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values. Dimensions below the winning run
    /// length are rejected here, so a game on a validated board can always
    /// be won.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < CONNECT_N {
            return Err(ConfigError::Validation(format!(
                "board.rows must be at least {CONNECT_N}"
            )));
        }
        if self.board.cols < CONNECT_N {
            return Err(ConfigError::Validation(format!(
                "board.cols must be at least {CONNECT_N}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board.rows, 10);
        assert_eq!(config.board.cols, 4);
        assert_eq!(config.players.red, PlayerKind::Human);
        assert_eq!(config.players.yellow, PlayerKind::Computer);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [board]
            rows = 6
            cols = 7

            [players]
            red = "computer"
            yellow = "human"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.players.red, PlayerKind::Computer);
        assert_eq!(config.players.yellow, PlayerKind::Human);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("[board]\nrows = 8\n").unwrap();
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.cols, DEFAULT_COLS);
        assert_eq!(config.players.yellow, PlayerKind::Computer);
    }

    #[test]
    fn test_rejects_board_too_small_to_win() {
        let mut config = AppConfig::default();
        config.board.rows = 3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));

        let mut config = AppConfig::default();
        config.board.cols = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_player_kind_from_str() {
        assert_eq!("human".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
        assert_eq!("c".parse::<PlayerKind>().unwrap(), PlayerKind::Computer);
        assert_eq!("Computer".parse::<PlayerKind>().unwrap(), PlayerKind::Computer);
        assert!("robot".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.board.rows, config.board.rows);
        assert_eq!(parsed.players.red, config.players.red);
    }
}
