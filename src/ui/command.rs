//! Line commands understood by the text front-end
//!
//! Squares are given as `<row> <col>` pairs of 0-based indices, matching
//! [`Square::new`]. Anything else is reported as
//! [`GameError::InvalidCommand`] or [`GameError::OutOfBounds`].

use crate::game::error::{GameError, GameResult};
use crate::game::types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pointer-style click driving both phases
    Click(Square),
    Select(Square),
    Move(Square, Square),
    Reset,
    Show,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> GameResult<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(invalid("empty command"));
        };
        let args = words
            .map(|word| {
                word.parse::<u8>()
                    .map_err(|_| invalid(format!("'{word}' is not a board index")))
            })
            .collect::<GameResult<Vec<u8>>>()?;

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("click", &[row, col]) => Command::Click(Square::try_new(row, col)?),
            ("select", &[row, col]) => Command::Select(Square::try_new(row, col)?),
            ("move", &[r1, c1, r2, c2]) => {
                Command::Move(Square::try_new(r1, c1)?, Square::try_new(r2, c2)?)
            }
            ("reset", []) => Command::Reset,
            ("show", []) => Command::Show,
            ("quit" | "exit", []) => Command::Quit,
            (other, _) => {
                return Err(invalid(format!(
                    "unknown command or wrong arguments: '{other}'"
                )))
            }
        };
        Ok(command)
    }
}

fn invalid(message: impl Into<String>) -> GameError {
    GameError::InvalidCommand {
        message: message.into(),
    }
}
