//! The live-piece collection.

use std::collections::HashSet;

use chess_core::{Coordinate, PieceKind, Side, BOARD_SIZE};

use crate::{Piece, PieceId, SetupError};

/// Back-rank order of the standard layout: rooks, knights, bishops, queen, king.
const BACK_RANK: [(PieceKind, i8); 8] = [
    (PieceKind::Rook, 0),
    (PieceKind::Rook, 7),
    (PieceKind::Knight, 1),
    (PieceKind::Knight, 6),
    (PieceKind::Bishop, 2),
    (PieceKind::Bishop, 5),
    (PieceKind::Queen, 3),
    (PieceKind::King, 4),
];

/// Every live piece, in a stable order.
///
/// Iteration order is insertion order, so threat and move enumeration is
/// deterministic. A piece leaves the board only when captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    /// Creates a board holding exactly the given pieces.
    ///
    /// No validation is performed; see [`Board::validate`].
    pub fn new(pieces: Vec<Piece>) -> Self {
        Board { pieces }
    }

    /// Creates the standard starting layout with ids 0-31.
    ///
    /// Each side gets its pawns first (files 0-7), then rooks, knights,
    /// bishops, queen, and king. White's ids are 0-15, Black's 16-31.
    pub fn standard() -> Self {
        let mut pieces = Vec::with_capacity(32);
        let mut next_id = 0u8;

        for side in Side::ALL {
            for file in 0..BOARD_SIZE {
                pieces.push(Piece::new(
                    PieceId(next_id),
                    side,
                    PieceKind::Pawn,
                    Coordinate::new(file, side.pawn_rank()),
                ));
                next_id += 1;
            }
            for (kind, file) in BACK_RANK {
                pieces.push(Piece::new(
                    PieceId(next_id),
                    side,
                    kind,
                    Coordinate::new(file, side.back_rank()),
                ));
                next_id += 1;
            }
        }

        Board { pieces }
    }

    /// Returns all live pieces.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the live pieces of one side.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.side() == side)
    }

    /// Returns the number of live pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if no pieces are left.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Returns the piece standing on `position`, if any.
    pub fn piece_at(&self, position: Coordinate) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position() == position)
    }

    /// Returns the live piece with the given id.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id() == id)
    }

    pub(crate) fn index_of(&self, id: PieceId) -> Option<usize> {
        self.pieces.iter().position(|p| p.id() == id)
    }

    /// Returns the king of `side`.
    pub fn king(&self, side: Side) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.kind() == PieceKind::King && p.side() == side)
    }

    /// Returns true if a piece other than `id` stands on `position`.
    pub fn is_occupied_by_other(&self, position: Coordinate, id: PieceId) -> bool {
        self.pieces
            .iter()
            .any(|p| p.id() != id && p.position() == position)
    }

    /// Removes a captured piece, returning it.
    pub(crate) fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let index = self.index_of(id)?;
        Some(self.pieces.remove(index))
    }

    /// Runs `inspect` with the piece at `index` temporarily relocated to `target`.
    ///
    /// The original position is restored before returning, whatever `inspect`
    /// returns.
    pub(crate) fn with_trial_position<R>(
        &mut self,
        index: usize,
        target: Coordinate,
        inspect: impl FnOnce(&Board) -> R,
    ) -> R {
        let saved = self.pieces[index].position();
        self.pieces[index].set_position(target);
        let result = inspect(self);
        self.pieces[index].set_position(saved);
        result
    }

    /// Runs `inspect` with the piece at `victim_index` taken off the board and
    /// the piece at `index` moved onto its square.
    ///
    /// Both pieces are back in place, in their original order, before
    /// returning.
    pub(crate) fn with_trial_capture<R>(
        &mut self,
        index: usize,
        victim_index: usize,
        inspect: impl FnOnce(&Board) -> R,
    ) -> R {
        let victim = self.pieces.remove(victim_index);
        let index = if victim_index < index { index - 1 } else { index };
        let result = self.with_trial_position(index, victim.position(), inspect);
        self.pieces.insert(victim_index, victim);
        result
    }

    /// Replaces every pawn standing on its promotion rank with a queen.
    ///
    /// Returns the ids of the promoted pieces.
    pub(crate) fn promote_pawns(&mut self) -> Vec<PieceId> {
        let mut promoted = Vec::new();
        for piece in self.pieces.iter_mut().filter(|p| p.should_promote()) {
            piece.promote();
            promoted.push(piece.id());
        }
        promoted
    }

    /// Checks the structural invariants of a custom layout.
    ///
    /// Every piece must be on the board, ids and squares must be unique, and
    /// each side must have exactly one king.
    pub fn validate(&self) -> Result<(), SetupError> {
        let mut ids = HashSet::new();
        let mut squares = HashSet::new();

        for piece in &self.pieces {
            if piece.position().is_out_of_bounds() {
                return Err(SetupError::OutOfBounds(piece.id(), piece.position()));
            }
            if !ids.insert(piece.id()) {
                return Err(SetupError::DuplicateId(piece.id()));
            }
            if !squares.insert(piece.position()) {
                return Err(SetupError::SharedSquare(piece.position()));
            }
        }

        for side in Side::ALL {
            let kings = self
                .pieces_of(side)
                .filter(|p| p.kind() == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(SetupError::KingCount { side, count: kings });
            }
        }

        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout() {
        let board = Board::standard();
        assert_eq!(board.len(), 32);
        assert_eq!(board.pieces_of(Side::White).count(), 16);
        assert_eq!(board.pieces_of(Side::Black).count(), 16);
        assert!(board.validate().is_ok());

        let white_king = board.king(Side::White).unwrap();
        assert_eq!(white_king.position(), Coordinate::new(4, 0));
        assert_eq!(white_king.id(), PieceId(15));

        let black_king = board.king(Side::Black).unwrap();
        assert_eq!(black_king.position(), Coordinate::new(4, 7));
        assert_eq!(black_king.id(), PieceId(31));

        let black_queen = board.piece_at(Coordinate::new(3, 7)).unwrap();
        assert_eq!(black_queen.kind(), PieceKind::Queen);
        assert_eq!(black_queen.id(), PieceId(30));

        for file in 0..8 {
            let pawn = board.piece_at(Coordinate::new(file, 1)).unwrap();
            assert_eq!(pawn.kind(), PieceKind::Pawn);
            assert_eq!(pawn.side(), Side::White);
            assert_eq!(pawn.id(), PieceId(file as u8));

            let pawn = board.piece_at(Coordinate::new(file, 6)).unwrap();
            assert_eq!(pawn.side(), Side::Black);
        }

        for rank in 2..6 {
            for file in 0..8 {
                assert!(board.piece_at(Coordinate::new(file, rank)).is_none());
            }
        }
    }

    #[test]
    fn trial_position_is_restored() {
        let mut board = Board::standard();
        let index = board.index_of(PieceId(4)).unwrap();
        let seen = board.with_trial_position(index, Coordinate::new(4, 3), |b| {
            b.piece(PieceId(4)).unwrap().position()
        });
        assert_eq!(seen, Coordinate::new(4, 3));
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn trial_capture_is_restored() {
        let mut board = Board::standard();
        let attacker = board.index_of(PieceId(8)).unwrap();
        let victim = board.index_of(PieceId(0)).unwrap();
        let seen = board.with_trial_capture(attacker, victim, |b| {
            (
                b.len(),
                b.piece(PieceId(0)).is_none(),
                b.piece_at(Coordinate::new(0, 1)).map(Piece::id),
            )
        });
        assert_eq!(seen, (31, true, Some(PieceId(8))));
        assert_eq!(board, Board::standard());

        // Victim stored after the attacker.
        let attacker = board.index_of(PieceId(24)).unwrap();
        let victim = board.index_of(PieceId(31)).unwrap();
        board.with_trial_capture(attacker, victim, |b| {
            assert_eq!(b.piece(PieceId(24)).unwrap().position(), Coordinate::new(4, 7));
        });
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn remove_by_id() {
        let mut board = Board::standard();
        let removed = board.remove(PieceId(20)).unwrap();
        assert_eq!(removed.position(), Coordinate::new(4, 6));
        assert_eq!(board.len(), 31);
        assert!(board.piece(PieceId(20)).is_none());
        assert!(board.remove(PieceId(20)).is_none());
    }

    #[test]
    fn validate_rejects_bad_layouts() {
        let king = |id, side, file, rank| {
            Piece::new(PieceId(id), side, PieceKind::King, Coordinate::new(file, rank))
        };

        let missing_king = Board::new(vec![king(0, Side::White, 4, 0)]);
        assert_eq!(
            missing_king.validate(),
            Err(SetupError::KingCount {
                side: Side::Black,
                count: 0
            })
        );

        let duplicate = Board::new(vec![king(0, Side::White, 4, 0), king(0, Side::Black, 4, 7)]);
        assert_eq!(duplicate.validate(), Err(SetupError::DuplicateId(PieceId(0))));

        let shared = Board::new(vec![king(0, Side::White, 4, 0), king(1, Side::Black, 4, 0)]);
        assert_eq!(
            shared.validate(),
            Err(SetupError::SharedSquare(Coordinate::new(4, 0)))
        );

        let off_board = Board::new(vec![king(0, Side::White, 4, 8), king(1, Side::Black, 4, 7)]);
        assert_eq!(
            off_board.validate(),
            Err(SetupError::OutOfBounds(PieceId(0), Coordinate::new(4, 8)))
        );
    }
}
