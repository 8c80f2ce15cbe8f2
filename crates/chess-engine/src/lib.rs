//! Ray-walking chess rules engine.
//!
//! This crate provides:
//! - [`Piece`] - a live piece with its move and attack rays
//! - [`Board`] - the collection of live pieces
//! - [`GameState`] - board plus turn, check, and checkmate status
//! - [`Game`] - move execution: ownership, moves, captures, promotion
//! - [`movegen`] - legal move and capture generation
//! - [`check`] - threat, check, and checkmate detection
//!
//! # Architecture
//!
//! Every piece carries rays: lists of offsets ordered nearest square first.
//! Moves walk a ray until the first blocked square; captures take the first
//! occupied square of an attack ray. A move or capture is only legal if it
//! does not leave the mover's king in check, which is tested by relocating the
//! piece on the live board, recomputing check, and putting it back.
//!
//! # Example
//!
//! ```
//! use chess_core::Coordinate;
//! use chess_engine::Game;
//!
//! let mut game = Game::new();
//! let knight = game.legal_moves(Coordinate::new(6, 0)).unwrap();
//! assert_eq!(knight.moves.len(), 2);
//!
//! let outcome = game.move_piece(Coordinate::new(4, 1), Coordinate::new(4, 3)).unwrap();
//! assert!(outcome.is_success());
//! ```

mod board;
pub mod check;
mod error;
mod game;
pub mod movegen;
mod piece;
pub mod rays;
mod state;

pub use board::Board;
pub use error::{GameError, SetupError};
pub use game::{Game, MoveOutcome, Rejection, Selector};
pub use movegen::LegalMoves;
pub use piece::{Piece, PieceId};
pub use state::GameState;
