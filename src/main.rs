use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use web_time::Instant;

use pawnboard::game::{
    ClickOutcome, GameState, MoveOutcome, OriginOutcome, RejectionIndicator, Square,
};
use pawnboard::ui::{render_board, Command, TextStyle};

/// Two-player pawn board played from the terminal
#[derive(Parser, Debug)]
#[command(name = "pawnboard", version, about)]
struct Args {
    /// Print board snapshots as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Tracing filter, e.g. `debug` or `pawnboard=trace` (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Render pieces as `wP`-style tags instead of chess symbols
    #[arg(long)]
    no_glyphs: bool,
}

/// One event plus the state it left behind, for `--json` output
#[derive(Serialize)]
struct Snapshot<'a, E: Serialize> {
    event: E,
    state: &'a GameState,
    turn_label: String,
    rejected: Option<Square>,
}

struct Frontend {
    game: GameState,
    rejection: RejectionIndicator,
    style: TextStyle,
    json: bool,
}

impl Frontend {
    fn run(&mut self, command: Command) -> Result<bool> {
        if command != Command::Show {
            self.rejection.clear();
        }
        match command {
            Command::Click(square) => {
                let outcome = self.game.click(square);
                if let ClickOutcome::Move { destination, outcome } = outcome {
                    self.after_move(destination, outcome);
                }
                self.print(outcome)?;
            }
            Command::Select(square) => {
                let outcome = self.game.select_origin(square);
                if outcome == OriginOutcome::Ignored && !self.json {
                    println!("Cannot pick up {square}");
                }
                self.print(outcome)?;
            }
            Command::Move(origin, destination) => {
                let outcome = self.game.attempt_move(origin, destination);
                self.after_move(destination, outcome);
                self.print(outcome)?;
            }
            Command::Reset => {
                self.game.reset();
                self.print("reset")?;
            }
            Command::Show => self.print("show")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn after_move(&mut self, destination: Square, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Rejected => self.rejection.flag(destination, Instant::now()),
            MoveOutcome::Accepted(report) if report.game_over.is_game_over() && !self.json => {
                println!("{}", report.game_over.message());
            }
            MoveOutcome::Accepted(_) => {}
        }
    }

    fn print<E: Serialize>(&self, event: E) -> Result<()> {
        let now = Instant::now();
        if self.json {
            let snapshot = Snapshot {
                event,
                state: &self.game,
                turn_label: self.game.turn().label(),
                rejected: self.rejection.active(now),
            };
            let line = serde_json::to_string(&snapshot).context("serializing snapshot")?;
            println!("{line}");
        } else {
            print!("{}", render_board(&self.game, &self.rejection, now, self.style));
        }
        io::stdout().flush().context("flushing stdout")
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut frontend = Frontend {
        game: GameState::new(),
        rejection: RejectionIndicator::default(),
        style: TextStyle {
            glyphs: !args.no_glyphs,
        },
        json: args.json,
    };
    frontend.print("start")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading command from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(command) => {
                if !frontend.run(command)? {
                    break;
                }
            }
            Err(err) => warn!("[INPUT] {err}"),
        }
    }

    Ok(())
}
