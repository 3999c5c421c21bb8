use std::path::Path;

use crate::engine::{Player, SessionConfig, MIN_DIMENSION};
use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: GameConfig,
    pub matchmaking: MatchmakingConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Per-turn countdown; a turn not played within this window gets a
    /// random move.
    pub turn_seconds: u64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchmakingConfig {
    /// How long the simulated opponent search takes.
    pub search_seconds: u64,
    /// Pause between "opponent found" and the first turn.
    pub start_pause_seconds: u64,
    /// Refresh interval of the simulated online stats on the home screen.
    pub stats_refresh_seconds: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 6, cols: 7 }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { turn_seconds: 30 }
    }
}

impl Default for MatchmakingConfig {
    fn default() -> Self {
        MatchmakingConfig {
            search_seconds: 5,
            start_pause_seconds: 2,
            stats_refresh_seconds: 5,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            game: GameConfig::default(),
            matchmaking: MatchmakingConfig::default(),
        }
    }
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

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be >= {MIN_DIMENSION}"
            )));
        }
        if self.board.cols < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.cols must be >= {MIN_DIMENSION}"
            )));
        }
        if self.game.turn_seconds == 0 {
            return Err(ConfigError::Validation(
                "game.turn_seconds must be > 0".into(),
            ));
        }
        if self.matchmaking.search_seconds == 0 {
            return Err(ConfigError::Validation(
                "matchmaking.search_seconds must be > 0".into(),
            ));
        }
        if self.matchmaking.stats_refresh_seconds == 0 {
            return Err(ConfigError::Validation(
                "matchmaking.stats_refresh_seconds must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Session parameters derived from this configuration. Red moves first,
    /// as in the original game.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            rows: self.board.rows,
            cols: self.board.cols,
            turn_seconds: self.game.turn_seconds,
            starting_player: Player::Red,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
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
[game]
turn_seconds = 10
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.turn_seconds, 10);
        // Other fields should be defaults
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.matchmaking.search_seconds, 5);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.game.turn_seconds, 30);
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = AppConfig::default();
        config.board.rows = 3;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.cols = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_turn_seconds() {
        let mut config = AppConfig::default();
        config.game.turn_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_search_seconds() {
        let mut config = AppConfig::default();
        config.matchmaking.search_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.turn_seconds, 30);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 8
cols = 9
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.cols, 9);
        // Others are defaults
        assert_eq!(config.game.turn_seconds, 30);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[board]\nrows = 1\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn test_session_config_mirrors_settings() {
        let mut config = AppConfig::default();
        config.board.rows = 10;
        config.game.turn_seconds = 15;
        let session = config.session_config();
        assert_eq!(session.rows, 10);
        assert_eq!(session.cols, 7);
        assert_eq!(session.turn_seconds, 15);
        assert_eq!(session.starting_player, Player::Red);
    }
}
