//! Error types for game module
//!
//! Illegal moves and ignored selections are ordinary outcomes and never show
//! up here. These errors cover integration mistakes: coordinates outside the
//! board and malformed front-end commands.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// Coordinates outside the 8x8 board
    #[error("Square ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: u8, col: u8 },

    /// Front-end command could not be understood
    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
