//! Chess rules module - Pure game logic
//!
//! Implements move validation and board state management using pure
//! functions, so the rules can be tested without any state machine around
//! them.
//!
//! # Module Structure
//!
//! - `board_state` - The 8x8 occupant grid and the standard starting layout
//! - `piece_moves` - Movement rules (pawns only) and move hints
//!
//! # Implemented Rule Subset
//!
//! Pawns advance one square, two squares from their start row, and capture
//! diagonally. The two-square advance checks only the destination, so a
//! piece standing in between does not block it. No other piece type moves;
//! there is no castling, en passant, promotion or check detection.

pub mod board_state;
pub mod piece_moves;


pub use board_state::BoardState;
pub use piece_moves::{get_possible_moves, is_valid_move};
