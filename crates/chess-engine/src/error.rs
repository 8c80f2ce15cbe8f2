//! Engine error types.
//!
//! Illegal move attempts are not errors; they come back as
//! [`MoveOutcome::Rejected`](crate::MoveOutcome::Rejected). The errors here
//! mean a required piece could not be resolved or the board broke one of
//! its invariants.

use chess_core::{Coordinate, Side};
use thiserror::Error;

use crate::PieceId;

/// Errors raised by game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No live piece stands on the selected square.
    #[error("the selected piece does not exist: no piece at {0}")]
    PieceNotFound(Coordinate),

    /// No live piece carries the given id.
    #[error("the selected piece does not exist: no piece with id {0}")]
    UnknownPiece(PieceId),

    /// The king of a side is gone. The game state is unusable.
    #[error("invariant violated: {0} has no king on the board")]
    KingMissing(Side),

    /// A move would have captured a king. The game state is unusable.
    #[error("invariant violated: {0}'s king was about to be captured")]
    KingCaptured(Side),

    /// A custom layout failed validation.
    #[error("invalid setup: {0}")]
    Setup(#[from] SetupError),
}

impl GameError {
    /// Returns true for invariant violations that leave the game unusable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::KingMissing(_) | GameError::KingCaptured(_))
    }
}

/// Reasons a custom layout is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("piece {0} is outside the board at {1}")]
    OutOfBounds(PieceId, Coordinate),

    #[error("piece id {0} is used more than once")]
    DuplicateId(PieceId),

    #[error("more than one piece stands on {0}")]
    SharedSquare(Coordinate),

    #[error("{side} has {count} kings, expected exactly one")]
    KingCount { side: Side, count: usize },
}
