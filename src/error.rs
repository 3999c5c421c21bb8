use std::path::PathBuf;

/// Errors produced by the game engine.
///
/// `ColumnOutOfRange`, `ColumnFull` and `GameNotActive` are recoverable
/// rejections: the move is refused and board/session state is left
/// untouched. `InvalidDimensions` is fatal to session creation.
/// `InvalidPlacement` signals that a caller bypassed the required
/// lowest-empty-row query, which is a bug in the caller rather than bad
/// user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("board dimensions {rows}x{cols} are too small (minimum 4x4)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("column {column} is out of range (board has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is not active")]
    GameNotActive,

    #[error("cell ({row}, {column}) is not the lowest empty cell of its column")]
    InvalidPlacement { row: usize, column: usize },
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
