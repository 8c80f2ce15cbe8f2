//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Coordinate`] for board positions and relative offsets
//! - [`Side`] for the two players
//! - [`PieceKind`] for the six piece variants
//! - [`CoordinateError`] for coordinate parsing failures

mod coord;
mod error;
mod kind;
mod side;

pub use coord::{Coordinate, BOARD_SIZE};
pub use error::CoordinateError;
pub use kind::PieceKind;
pub use side::Side;
