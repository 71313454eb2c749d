//! The game state owned by the core
//!
//! [`GameState`] is the single source of truth for board, turn and selection.
//! The presentation layer reads it freely but has no way to mutate the board
//! or the turn directly: every change goes through the move protocol in
//! [`crate::game::systems`] or through [`GameState::reset`].
//!
//! All methods take `&mut self`, so mutations are serialized by the borrow
//! checker. A host that shares the state between threads wraps it in its own
//! lock and holds it for a whole move attempt.

use serde::Serialize;
use tracing::info;

use super::resources::{CurrentTurn, Selection};
use super::rules::BoardState;
use super::systems::{self, ClickOutcome, MoveOutcome, OriginOutcome};
use super::types::Square;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    pub(crate) board: BoardState,
    pub(crate) turn: CurrentTurn,
    pub(crate) selection: Selection,
}

impl GameState {
    /// A fresh game: standard layout, White to move, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn turn(&self) -> &CurrentTurn {
        &self.turn
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// First phase of a move: pick up the piece on `square`
    pub fn select_origin(&mut self, square: Square) -> OriginOutcome {
        systems::select_origin(self, square)
    }

    /// Validate and, if legal, commit a move from `origin` to `destination`
    pub fn attempt_move(&mut self, origin: Square, destination: Square) -> MoveOutcome {
        systems::attempt_move(self, origin, destination)
    }

    /// Pointer-style entry point driving both phases of the protocol
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        systems::handle_click(self, square)
    }

    /// Reinitialize everything: standard layout, White to move, no selection
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("[GAME] Board reset");
    }
}
