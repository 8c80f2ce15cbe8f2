//! Turn, check, and checkmate bookkeeping around the board.

use chess_core::Side;

use crate::check;
use crate::{Board, GameError, PieceId};

/// The authoritative state of a game.
///
/// The check flag is derived from `threats`: the side to move is in check
/// exactly when the list is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    turn: Side,
    threats: Vec<PieceId>,
    checkmate: bool,
}

impl GameState {
    /// Creates the standard starting state with White to move.
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            turn: Side::White,
            threats: Vec::new(),
            checkmate: false,
        }
    }

    /// Creates a state from a custom board, validating it and computing the
    /// check and checkmate status of `turn`.
    pub fn from_board(board: Board, turn: Side) -> Result<Self, GameError> {
        board.validate()?;
        let mut state = GameState {
            board,
            turn,
            threats: Vec::new(),
            checkmate: false,
        };
        state.refresh()?;
        Ok(state)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Returns true if the side to move is in check.
    pub fn in_check(&self) -> bool {
        !self.threats.is_empty()
    }

    /// Returns the pieces giving check; empty when not in check.
    pub fn threats(&self) -> &[PieceId] {
        &self.threats
    }

    /// Returns true if the side to move has been checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    pub(crate) fn toggle_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Recomputes whether the side to move is in check.
    ///
    /// Returns the new check flag.
    pub fn check_for_check(&mut self) -> Result<bool, GameError> {
        self.threats = check::king_threats(&self.board, self.turn)?;
        if self.in_check() {
            tracing::info!(side = %self.turn, threats = self.threats.len(), "check");
        }
        Ok(self.in_check())
    }

    /// Recomputes whether the side to move is checkmated.
    ///
    /// Only meaningful in check; outside check the flag is cleared.
    pub fn check_for_checkmate(&mut self) -> Result<bool, GameError> {
        self.checkmate = if self.in_check() {
            check::count_check_responses(&mut self.board, self.turn, &self.threats)? == 0
        } else {
            false
        };
        if self.checkmate {
            tracing::info!(loser = %self.turn, "checkmate");
        }
        Ok(self.checkmate)
    }

    /// Recomputes check and, when in check, checkmate.
    pub(crate) fn refresh(&mut self) -> Result<(), GameError> {
        self.check_for_check()?;
        self.check_for_checkmate()?;
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
