//! Chess game logic module - board state, move legality and turn flow
//!
//! The presentation layer (grid rendering, pointer input, highlights, the
//! game-over notice) lives outside this module. It calls into
//! [`GameState`] and reflects what comes back.
//!
//! # Module Organization
//!
//! - `types` - Board coordinates ([`Square`])
//! - `pieces` - Piece colors, types and the starting back rank
//! - `rules` - Pure chess logic (move validation, board state)
//! - `resources` - Turn tracking, selection, game-over and rejection state
//! - `systems` - Operations that mutate the game (input, movement, game_logic)
//! - `state` - [`GameState`], the owned source of truth
//! - `error` - Integration errors (out-of-range squares, bad commands)
//!
//! # Example
//!
//! ```rust
//! use pawnboard::game::{ClickOutcome, GameState, MoveOutcome, OriginOutcome, Square};
//!
//! let mut game = GameState::new();
//! assert_eq!(
//!     game.click(Square::new(1, 4)),
//!     ClickOutcome::Origin(OriginOutcome::Selected)
//! );
//! match game.click(Square::new(3, 4)) {
//!     ClickOutcome::Move { outcome: MoveOutcome::Accepted(_), .. } => {}
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert_eq!(game.turn().label(), "Black's Turn");
//! ```

pub mod error;
pub mod pieces;
pub mod resources;
pub mod rules;
pub mod state;
pub mod systems;
pub mod types;

pub use error::{GameError, GameResult};
pub use pieces::{Piece, PieceColor, PieceType};
pub use resources::{CurrentTurn, GameOverState, RejectionIndicator, Selection};
pub use rules::BoardState;
pub use state::GameState;
pub use systems::{ClickOutcome, MoveOutcome, MoveRecord, MoveReport, OriginOutcome};
pub use types::Square;
