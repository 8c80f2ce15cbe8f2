//! Errors for parsing coordinates from text.

use thiserror::Error;

use crate::Coordinate;

/// Errors that can occur when parsing a [`Coordinate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("expected two numbers (file and rank), got {0}")]
    WrongComponentCount(usize),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("coordinate {0} is outside the board (0-7 on both axes)")]
    OutOfBounds(Coordinate),
}
