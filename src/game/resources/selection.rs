//! Selection state for the two-phase move protocol
//!
//! A move is attempted in two clicks: the first picks up an origin, the
//! second names the destination. The selection is cleared after every
//! attempt, accepted or rejected.

use serde::Serialize;

use crate::game::types::Square;

/// Which square, if any, is currently picked up
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    NoSelection,
    /// An own piece is picked up; the next click is the destination
    OriginSelected {
        origin: Square,
        /// Squares to highlight as reachable
        possible_moves: Vec<Square>,
    },
}

impl Selection {
    pub fn clear(&mut self) {
        *self = Selection::NoSelection;
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::OriginSelected { .. })
    }

    pub fn origin(&self) -> Option<Square> {
        match self {
            Selection::NoSelection => None,
            Selection::OriginSelected { origin, .. } => Some(*origin),
        }
    }

    /// Highlighted destinations, empty when nothing is selected
    pub fn possible_moves(&self) -> &[Square] {
        match self {
            Selection::NoSelection => &[],
            Selection::OriginSelected { possible_moves, .. } => possible_moves,
        }
    }
}
