//! Game systems - the operations that mutate [`crate::game::state::GameState`]
//!
//! # Systems
//!
//! - `input` - Two-phase selection protocol (select origin, attempt move)
//! - `movement` - Commits validated moves to the board
//! - `game_logic` - Termination check and post-game reset
//!
//! # Move Attempt Order
//!
//! ```text
//! select_origin → attempt_move → is_valid_move ─┬─ false → Rejected
//!                                               └─ true  → execute_move → check_game_over_state
//! ```

pub mod game_logic;
pub mod input;
pub mod movement;

pub use game_logic::{check_game_over, check_game_over_state};
pub use input::{
    attempt_move, handle_click, select_origin, ClickOutcome, MoveOutcome, MoveReport,
    OriginOutcome,
};
pub use movement::{execute_move, MoveRecord};
