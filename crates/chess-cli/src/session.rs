//! The interactive game loop.
//!
//! Reads commands line by line and writes prompts and the board to any
//! writer, so the loop can be driven from tests as well as a terminal.

use std::io::{BufRead, Write};

use chess_core::{Coordinate, Side};
use chess_engine::{Game, MoveOutcome};

use crate::input::{parse_command, Command};
use crate::render::render;

/// Display options for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub color: bool,
    pub show_hints: bool,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The given side won by checkmate.
    Checkmate(Side),
    /// The player quit or input ran out.
    Quit,
}

/// Drives a game from player input.
pub struct Session<R, W> {
    game: Game,
    options: SessionOptions,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, options: SessionOptions, input: R, output: W) -> Self {
        Session {
            game,
            options,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until checkmate, `quit`, or end of input.
    ///
    /// Engine invariant violations end the session with an error.
    pub fn run(&mut self) -> anyhow::Result<SessionEnd> {
        loop {
            if let Some(winner) = self.game.winner() {
                self.show_board()?;
                writeln!(self.output, "Checkmate! {} wins.", winner)?;
                tracing::info!(%winner, "game over");
                return Ok(SessionEnd::Checkmate(winner));
            }

            self.show_board()?;
            if self.game.in_check() {
                writeln!(self.output, "{} is in check!", self.game.turn())?;
            }

            let prompt = format!("{} to move. Select a piece (x y): ", self.game.turn());
            let from = match self.read_square(&prompt)? {
                Some(square) => square,
                None => return Ok(SessionEnd::Quit),
            };

            if self.game.piece_at(from).is_none() {
                writeln!(self.output, "The selected piece does not exist")?;
                continue;
            }
            if self.options.show_hints {
                self.show_hints(from)?;
            }

            let to = match self.read_square("Move to (x y): ")? {
                Some(square) => square,
                None => return Ok(SessionEnd::Quit),
            };

            let outcome = self.game.move_piece(from, to)?;
            match &outcome {
                MoveOutcome::Rejected(rejection) => writeln!(self.output, "{}", rejection)?,
                MoveOutcome::Captured { victim, .. } => {
                    writeln!(self.output, "Captured {} {}.", victim.side(), victim.kind())?
                }
                MoveOutcome::Moved { .. } => {}
            }
            if !outcome.promotions().is_empty() {
                writeln!(self.output, "Pawn promoted to queen.")?;
            }
        }
    }

    fn show_board(&mut self) -> std::io::Result<()> {
        write!(
            self.output,
            "{}",
            render(self.game.pieces(), self.options.color)
        )
    }

    fn show_hints(&mut self, from: Coordinate) -> anyhow::Result<()> {
        let legal = self.game.legal_moves(from)?;
        if legal.is_empty() {
            writeln!(self.output, "That piece has no legal moves")?;
            return Ok(());
        }
        writeln!(self.output, "Moves: {}", join(&legal.moves))?;
        writeln!(self.output, "Attacks: {}", join(&legal.attacks))?;
        Ok(())
    }

    /// Prompts until a square is entered. `None` means quit or end of input.
    fn read_square(&mut self, prompt: &str) -> anyhow::Result<Option<Coordinate>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match parse_command(&line) {
                Ok(Command::Square(square)) => return Ok(Some(square)),
                Ok(Command::Quit) => return Ok(None),
                Err(err) => {
                    tracing::debug!(input = line.trim(), %err, "unreadable input");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }
}

fn join(squares: &[Coordinate]) -> String {
    if squares.is_empty() {
        return "none".to_string();
    }
    squares
        .iter()
        .map(Coordinate::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
