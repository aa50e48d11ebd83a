use std::path::PathBuf;

/// Errors from placing or removing tokens, and from the turn state machine.
///
/// All of these are recoverable: the caller picks another column or stops
/// issuing moves once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column index out of range")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,

    #[error("column is empty")]
    ColumnEmpty,

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull.to_string(), "column is full");
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be at least 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be at least 4"
        );
    }
}
