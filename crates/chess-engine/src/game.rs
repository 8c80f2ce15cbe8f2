//! Move execution.
//!
//! [`Game`] is the entry point for callers: it resolves the selected piece,
//! checks ownership, tries a move and then a capture, promotes pawns,
//! passes the turn, and refreshes check and checkmate.

use std::fmt;

use chess_core::{Coordinate, PieceKind, Side};

use crate::movegen::{self, LegalMoves};
use crate::{Board, GameError, GameState, Piece, PieceId};

/// How a piece is picked for a legal-move query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// The piece standing on a square.
    Position(Coordinate),
    /// The piece with an id.
    Piece(PieceId),
}

impl From<Coordinate> for Selector {
    fn from(position: Coordinate) -> Self {
        Selector::Position(position)
    }
}

impl From<PieceId> for Selector {
    fn from(id: PieceId) -> Self {
        Selector::Piece(id)
    }
}

impl From<&Piece> for Selector {
    fn from(piece: &Piece) -> Self {
        Selector::Piece(piece.id())
    }
}

/// Why a move request was refused. Refusals leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The selected piece belongs to the side not on move.
    NotYourPiece,
    /// The destination is neither a legal move nor a legal capture.
    Invalid,
}

impl Rejection {
    /// Returns the message shown to the player.
    pub const fn message(self) -> &'static str {
        match self {
            Rejection::NotYourPiece => "That's not your piece!",
            Rejection::Invalid => "Invalid move!",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved to an empty square.
    Moved {
        piece: PieceId,
        from: Coordinate,
        to: Coordinate,
        /// Pawns promoted to queens after the move.
        promotions: Vec<PieceId>,
    },
    /// The piece captured `victim`, which has left the board.
    Captured {
        piece: PieceId,
        from: Coordinate,
        to: Coordinate,
        victim: Piece,
        /// Pawns promoted to queens after the capture.
        promotions: Vec<PieceId>,
    },
    /// Nothing happened.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if the board changed and the turn passed.
    pub fn is_success(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    /// Returns the player-facing message of a refused move.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            MoveOutcome::Rejected(rejection) => Some(rejection.message()),
            _ => None,
        }
    }

    /// Returns the ids of pawns promoted by this move.
    pub fn promotions(&self) -> &[PieceId] {
        match self {
            MoveOutcome::Moved { promotions, .. } | MoveOutcome::Captured { promotions, .. } => {
                promotions
            }
            MoveOutcome::Rejected(_) => &[],
        }
    }
}

/// A chess game between two sides, White moving first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with the standard starting layout.
    pub fn new() -> Self {
        Game {
            state: GameState::new(),
        }
    }

    /// Creates a game from a custom layout with `turn` to move.
    ///
    /// The layout is validated and its check status computed up front.
    pub fn from_pieces(pieces: Vec<Piece>, turn: Side) -> Result<Self, GameError> {
        Ok(Game {
            state: GameState::from_board(Board::new(pieces), turn)?,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns all live pieces.
    pub fn pieces(&self) -> &[Piece] {
        self.state.board().pieces()
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Side {
        self.state.turn()
    }

    /// Returns true if the side to move is in check.
    pub fn in_check(&self) -> bool {
        self.state.in_check()
    }

    /// Returns the pieces giving check.
    pub fn threats(&self) -> &[PieceId] {
        self.state.threats()
    }

    /// Returns true if the side to move has been checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.state.is_checkmate()
    }

    /// Returns the winning side once the game has ended in checkmate.
    pub fn winner(&self) -> Option<Side> {
        self.is_checkmate().then(|| self.turn().opposite())
    }

    /// Returns the piece on `position`, if any.
    pub fn piece_at(&self, position: Coordinate) -> Option<&Piece> {
        self.state.board().piece_at(position)
    }

    /// Returns the live piece with the given id.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.state.board().piece(id)
    }

    fn resolve(&self, selector: Selector) -> Result<PieceId, GameError> {
        match selector {
            Selector::Position(position) => self
                .piece_at(position)
                .map(Piece::id)
                .ok_or(GameError::PieceNotFound(position)),
            Selector::Piece(id) => self
                .piece(id)
                .map(Piece::id)
                .ok_or(GameError::UnknownPiece(id)),
        }
    }

    /// Returns the moves and captures of the selected piece, restricted to
    /// check answers while the side to move is in check.
    ///
    /// Takes `&mut self` because king safety is tested by trial moves on the
    /// live board; the board is unchanged when this returns.
    pub fn legal_moves(&mut self, selector: impl Into<Selector>) -> Result<LegalMoves, GameError> {
        let id = self.resolve(selector.into())?;
        let threats = self.state.threats().to_vec();
        movegen::legal_moves_for(&mut self.state.board, id, &threats)
    }

    /// Recomputes whether the side to move is in check.
    pub fn check_for_check(&mut self) -> Result<bool, GameError> {
        self.state.check_for_check()
    }

    /// Recomputes whether the side to move is checkmated.
    pub fn check_for_checkmate(&mut self) -> Result<bool, GameError> {
        self.state.check_for_checkmate()
    }

    /// Tries to move the piece on `from` to `to`, capturing if `to` holds an
    /// enemy piece.
    ///
    /// Illegal requests come back as [`MoveOutcome::Rejected`]. Errors are
    /// reserved for an empty `from` square and broken invariants.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> Result<MoveOutcome, GameError> {
        let piece = self.piece_at(from).ok_or(GameError::PieceNotFound(from))?;
        let id = piece.id();

        if piece.side() != self.turn() {
            tracing::debug!(piece = %id, %from, turn = %self.turn(), "rejected: not your piece");
            return Ok(MoveOutcome::Rejected(Rejection::NotYourPiece));
        }

        let threats = self.state.threats().to_vec();
        let board = &mut self.state.board;

        let mut outcome = if movegen::can_move(board, id, to, &threats)? {
            board
                .piece_mut(id)
                .ok_or(GameError::UnknownPiece(id))?
                .commit_move(to);
            tracing::debug!(piece = %id, %from, %to, "moved");
            MoveOutcome::Moved {
                piece: id,
                from,
                to,
                promotions: Vec::new(),
            }
        } else {
            let Some(victim) = board.piece_at(to) else {
                tracing::debug!(piece = %id, %from, %to, "rejected: no move or capture");
                return Ok(MoveOutcome::Rejected(Rejection::Invalid));
            };
            let (victim_id, victim_side, victim_kind) = (victim.id(), victim.side(), victim.kind());

            if movegen::can_attack(board, id, to, victim_id, &threats)? {
                if victim_kind == PieceKind::King {
                    tracing::error!(piece = %id, %to, king = %victim_side, "capture would remove a king");
                    return Err(GameError::KingCaptured(victim_side));
                }
                board
                    .piece_mut(id)
                    .ok_or(GameError::UnknownPiece(id))?
                    .set_position(to);
                let victim = board
                    .remove(victim_id)
                    .ok_or(GameError::UnknownPiece(victim_id))?;
                tracing::debug!(piece = %id, %from, %to, victim = %victim_id, "captured");
                MoveOutcome::Captured {
                    piece: id,
                    from,
                    to,
                    victim,
                    promotions: Vec::new(),
                }
            } else {
                tracing::debug!(piece = %id, %from, %to, "rejected: illegal capture");
                MoveOutcome::Rejected(Rejection::Invalid)
            }
        };

        let promoted = board.promote_pawns();
        for promoted_id in &promoted {
            tracing::debug!(piece = %promoted_id, "promoted to queen");
        }
        match &mut outcome {
            MoveOutcome::Moved { promotions, .. } | MoveOutcome::Captured { promotions, .. } => {
                *promotions = promoted;
            }
            MoveOutcome::Rejected(_) => {}
        }

        if outcome.is_success() {
            self.state.toggle_turn();
        }

        self.state.refresh()?;
        Ok(outcome)
    }
}
