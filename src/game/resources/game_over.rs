//! Game over state and result messages
//!
//! The only end condition is a captured king: once fewer than two kings are
//! on the board, the side that just moved has won. There are no draws.
//!
//! A terminal state is never kept around. The move protocol reports it and
//! immediately reinitializes the game, so [`GameOverState`] is a value that
//! travels with a move outcome rather than a state the board sits in.

use serde::Serialize;

use crate::game::pieces::PieceColor;

/// Result of the termination check after a move
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// White captured Black's king
    WhiteWon,

    /// Black captured White's king
    BlackWon,
}

impl GameOverState {
    /// The state for a win by `color`
    pub fn won_by(color: PieceColor) -> Self {
        match color {
            PieceColor::White => GameOverState::WhiteWon,
            PieceColor::Black => GameOverState::BlackWon,
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Human-readable result, e.g. `"White wins!"`
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "White wins!",
            GameOverState::BlackWon => "Black wins!",
        }
    }

    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::Playing => None,
            GameOverState::WhiteWon => Some(PieceColor::White),
            GameOverState::BlackWon => Some(PieceColor::Black),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_state_default() {
        let state = GameOverState::default();
        assert_eq!(state, GameOverState::Playing);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_won_by() {
        assert_eq!(GameOverState::won_by(PieceColor::White), GameOverState::WhiteWon);
        assert_eq!(GameOverState::won_by(PieceColor::Black), GameOverState::BlackWon);
    }

    #[test]
    fn test_messages() {
        assert_eq!(GameOverState::WhiteWon.message(), "White wins!");
        assert_eq!(GameOverState::BlackWon.message(), "Black wins!");
    }

    #[test]
    fn test_winner() {
        assert_eq!(GameOverState::WhiteWon.winner(), Some(PieceColor::White));
        assert_eq!(GameOverState::BlackWon.winner(), Some(PieceColor::Black));
        assert!(GameOverState::BlackWon.is_game_over());
    }
}
