//! Two-phase move protocol
//!
//! The first click on an own piece picks it up; the next click, wherever it
//! lands, is the destination. Every attempt clears the selection whether it
//! is accepted or rejected. Rejections and ignored clicks are ordinary
//! outcomes reported back to the caller, never errors.

use serde::Serialize;
use tracing::debug;

use super::game_logic::check_game_over_state;
use super::movement::{execute_move, MoveRecord};
use crate::game::resources::{GameOverState, Selection};
use crate::game::rules::{get_possible_moves, is_valid_move};
use crate::game::state::GameState;
use crate::game::types::Square;

/// Result of trying to pick up a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OriginOutcome {
    /// An own piece is now selected
    Selected,
    /// Empty square or opponent piece; nothing changed
    Ignored,
}

/// A committed move and the termination check that followed it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub record: MoveRecord,
    /// When not `Playing`, the game has already been reset
    pub game_over: GameOverState,
}

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    Accepted(MoveReport),
    /// Board and turn are unchanged
    Rejected,
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }
}

/// Result of a single click, depending on which phase it landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClickOutcome {
    Origin(OriginOutcome),
    Move {
        destination: Square,
        outcome: MoveOutcome,
    },
}

/// Pick up the piece on `square` if it belongs to the side to move
pub fn select_origin(state: &mut GameState, square: Square) -> OriginOutcome {
    let turn = state.turn.current();
    if state.board.get_piece_color(square) != Some(turn) {
        debug!("[INPUT] Ignored selection of {square} ({turn} to move)");
        return OriginOutcome::Ignored;
    }

    let possible_moves = get_possible_moves(&state.board, turn, square);
    debug!(
        "[INPUT] Selected {square}, {} possible moves",
        possible_moves.len()
    );
    state.selection = Selection::OriginSelected {
        origin: square,
        possible_moves,
    };
    OriginOutcome::Selected
}

/// Validate a move and commit it if legal
///
/// The origin must hold a piece of the side to move, the same condition
/// [`select_origin`] enforces. The selection is cleared in every case.
pub fn attempt_move(state: &mut GameState, origin: Square, destination: Square) -> MoveOutcome {
    let turn = state.turn.current();
    let owns_origin = state.board.get_piece_color(origin) == Some(turn);

    if !owns_origin || !is_valid_move(&state.board, turn, origin, destination) {
        debug!("[RULES] Rejected {origin} -> {destination} ({turn} to move)");
        state.selection.clear();
        return MoveOutcome::Rejected;
    }

    let record = execute_move(state, origin, destination);
    let game_over = check_game_over_state(state);
    MoveOutcome::Accepted(MoveReport { record, game_over })
}

/// Route a click to the phase the protocol is in
pub fn handle_click(state: &mut GameState, square: Square) -> ClickOutcome {
    match state.selection.origin() {
        None => ClickOutcome::Origin(select_origin(state, square)),
        Some(origin) => ClickOutcome::Move {
            destination: square,
            outcome: attempt_move(state, origin, square),
        },
    }
}
