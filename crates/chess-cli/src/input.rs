//! Parsing of player input lines.

use chess_core::{Coordinate, CoordinateError};
use thiserror::Error;

/// Errors in a line typed by the player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("please enter a square as two numbers, e.g. 4 1")]
    Empty,

    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A board square.
    Square(Coordinate),
    /// Leave the game.
    Quit,
}

/// Parses one line: `quit` (or `q`, `exit`) or a square such as `4 1`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    match line.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Ok(Command::Square(line.parse()?)),
    }
}
