//! Termination check
//!
//! The game ends as soon as fewer than two kings remain. The winner is the
//! side that made the capturing move, which is the opposite of the side to
//! move once the turn has been handed over.

use tracing::info;

use crate::game::pieces::PieceType;
use crate::game::resources::{CurrentTurn, GameOverState};
use crate::game::rules::BoardState;
use crate::game::state::GameState;

/// Inspect the board after a committed move
///
/// `turn` is the tracker after the move, so the mover is `turn.current().opposite()`.
pub fn check_game_over(board: &BoardState, turn: &CurrentTurn) -> GameOverState {
    if board.count_type(PieceType::King) < 2 {
        GameOverState::won_by(turn.current().opposite())
    } else {
        GameOverState::Playing
    }
}

/// Run the termination check and reset the game if it has ended
///
/// A captured king is both the win signal and the reset trigger: the
/// returned state carries the result while the game itself is already back
/// at the starting layout.
pub fn check_game_over_state(state: &mut GameState) -> GameOverState {
    let outcome = check_game_over(&state.board, &state.turn);
    if outcome.is_game_over() {
        info!("[GAME] {}", outcome.message());
        state.reset();
    }
    outcome
}
