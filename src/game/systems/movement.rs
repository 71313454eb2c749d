//! Move execution
//!
//! Applies an already-validated move. Nothing here re-checks legality and
//! there is no undo.

use serde::Serialize;
use tracing::info;

use crate::game::pieces::Piece;
use crate::game::state::GameState;
use crate::game::types::Square;

/// What a committed move changed on the board
///
/// Exactly two squares are affected: `from` is now empty and `to` holds
/// `moved`. `captured` is whatever stood on `to` before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved: Option<Piece>,
    pub captured: Option<Piece>,
}

/// Commit a validated move
///
/// Copies the origin occupant onto the destination (capturing anything
/// there), empties the origin, hands the turn to the other side and clears
/// the selection.
pub fn execute_move(state: &mut GameState, from: Square, to: Square) -> MoveRecord {
    let moved = state.board.get(from);
    let captured = state.board.get(to);

    state.board.set(to, moved);
    state.board.set(from, None);
    state.turn.advance();
    state.selection.clear();

    match (moved, captured) {
        (Some(piece), Some(target)) => {
            info!("[MOVE] {piece} {from} -> {to} captures {target}")
        }
        (Some(piece), None) => info!("[MOVE] {piece} {from} -> {to}"),
        (None, _) => info!("[MOVE] empty origin {from} -> {to}"),
    }

    MoveRecord {
        from,
        to,
        moved,
        captured,
    }
}
