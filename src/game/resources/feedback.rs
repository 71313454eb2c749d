//! Transient rejection indicator for the presentation layer
//!
//! When a move is rejected the UI flags the attempted destination for a
//! short while. The indicator is presentation state only: it is kept apart
//! from [`crate::game::state::GameState`] and nothing in it can touch the
//! board or the turn, so a late expiry cannot race with a real move.

use std::time::Duration;

use web_time::Instant;

use crate::game::types::Square;

/// How long a rejected destination stays flagged
pub const REJECTION_DISPLAY: Duration = Duration::from_secs(1);

/// The most recently rejected destination and when its flag expires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RejectionIndicator {
    flagged: Option<(Square, Instant)>,
}

impl RejectionIndicator {
    /// Flag `square` until [`REJECTION_DISPLAY`] after `now`
    pub fn flag(&mut self, square: Square, now: Instant) {
        self.flagged = Some((square, now + REJECTION_DISPLAY));
    }

    pub fn clear(&mut self) {
        self.flagged = None;
    }

    /// The flagged square, if its display time has not run out at `now`
    pub fn active(&self, now: Instant) -> Option<Square> {
        self.flagged
            .filter(|&(_, expires_at)| now < expires_at)
            .map(|(square, _)| square)
    }
}
