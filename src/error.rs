//! Centralized error types for the game.
//!
//! The simulation itself has no I/O, so most of these errors come from building
//! a maze, loading configuration, or talking to a drawing surface.

/// Main error type for the game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for map parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),
    #[error("Board has no rows")]
    EmptyBoard,
    #[error("Invalid board width at line {line}: expected {expected}, got {actual}")]
    RaggedRow { line: usize, expected: usize, actual: usize },
    #[error("Border cell ({x}, {y}) must be a wall")]
    OpenBorder { x: usize, y: usize },
    #[error("Board has {0} player spawns, at most one is allowed")]
    DuplicatePlayerSpawn(usize),
}

/// Errors produced while loading or validating a [`SimConfig`](crate::config::SimConfig).
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Load(Box::new(error))
    }
}

/// Errors raised by a drawing surface.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Surface has zero area")]
    EmptySurface,

    #[error("Drawing failed: {0}")]
    DrawFailed(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
