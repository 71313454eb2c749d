//! Game resources - the pieces of state owned by a game
//!
//! # Resource Categories
//!
//! ## Turn Management
//! - [`CurrentTurn`] - Tracks whose turn it is and move numbers
//!
//! ## Player Interaction
//! - [`Selection`] - Picked-up origin square and its highlighted moves
//! - [`RejectionIndicator`] - Transient flag on a rejected destination
//!
//! ## Game Status
//! - [`GameOverState`] - Win conditions and result messages
//!
//! `CurrentTurn` and `Selection` live inside
//! [`crate::game::state::GameState`]. `RejectionIndicator` belongs to the
//! presentation layer and is never stored there.

pub mod feedback;
pub mod game_over;
pub mod selection;
pub mod turn;

pub use feedback::*;
pub use game_over::*;
pub use selection::*;
pub use turn::*;
