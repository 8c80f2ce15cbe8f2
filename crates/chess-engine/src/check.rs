//! Check and checkmate detection.
//!
//! Everything here is a pure function of the board and a side. Trial moves
//! and trial captures relocate a piece (lifting the victim off the board),
//! ask [`king_threats`], and restore both; nothing reads or writes the
//! stored check flag of a game.

use chess_core::{Coordinate, Side};

use crate::{movegen, Board, GameError, Piece, PieceId};

/// Returns every piece other than `excluded` that attacks `position`,
/// whichever side it belongs to.
///
/// Attacks are computed with friendly fire enabled, so a piece "attacks" a
/// square held by its own side. That is what makes a defended piece show up
/// as covered.
pub fn threats_to(board: &Board, excluded: PieceId, position: Coordinate) -> Vec<PieceId> {
    board
        .pieces()
        .iter()
        .filter(|p| p.id() != excluded && attacks(p, board, position))
        .map(Piece::id)
        .collect()
}

/// Returns the pieces of the side opposing `side`, other than `excluded`,
/// that attack `position`.
pub fn enemy_threats_to(
    board: &Board,
    excluded: PieceId,
    position: Coordinate,
    side: Side,
) -> Vec<PieceId> {
    board
        .pieces()
        .iter()
        .filter(|p| p.id() != excluded && p.side() != side && attacks(p, board, position))
        .map(Piece::id)
        .collect()
}

fn attacks(piece: &Piece, board: &Board, position: Coordinate) -> bool {
    piece.legal_attacks(board, true).contains(&position)
}

/// Returns the enemy pieces currently giving check to the king of `side`.
///
/// An empty result means `side` is not in check.
pub fn king_threats(board: &Board, side: Side) -> Result<Vec<PieceId>, GameError> {
    let king = board.king(side).ok_or(GameError::KingMissing(side))?;
    Ok(enemy_threats_to(board, king.id(), king.position(), side))
}

/// Returns true if moving the piece at `index` to `target` leaves the king of
/// `side` in check.
pub(crate) fn exposes_king(
    board: &mut Board,
    index: usize,
    target: Coordinate,
    side: Side,
) -> Result<bool, GameError> {
    let threats = board.with_trial_position(index, target, |trial| king_threats(trial, side))?;
    if !threats.is_empty() {
        tracing::trace!(%target, %side, threats = threats.len(), "trial move exposes king");
    }
    Ok(!threats.is_empty())
}

/// Returns true if the piece at `index` capturing the piece at
/// `victim_index` leaves the king of `side` in check.
pub(crate) fn capture_exposes_king(
    board: &mut Board,
    index: usize,
    victim_index: usize,
    side: Side,
) -> Result<bool, GameError> {
    let threats =
        board.with_trial_capture(index, victim_index, |trial| king_threats(trial, side))?;
    if !threats.is_empty() {
        tracing::trace!(%side, threats = threats.len(), "trial capture exposes king");
    }
    Ok(!threats.is_empty())
}

/// Counts the legal responses `side` has to the check given by `threats`:
/// every check-aware move plus every check-aware capture of every piece.
///
/// Zero means checkmate.
pub fn count_check_responses(
    board: &mut Board,
    side: Side,
    threats: &[PieceId],
) -> Result<usize, GameError> {
    let ids: Vec<PieceId> = board.pieces_of(side).map(Piece::id).collect();
    let mut responses = 0;

    for id in ids {
        responses += movegen::legal_check_moves(board, id)?.len();
        responses += movegen::legal_check_attacks(board, id, threats)?.len();
    }

    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceKind;

    fn piece(id: u8, side: Side, kind: PieceKind, file: i8, rank: i8) -> Piece {
        Piece::new(PieceId(id), side, kind, Coordinate::new(file, rank))
    }

    /// White king on (4, 0) checked by a black rook on (4, 5); a white rook on
    /// (0, 5) covers the black rook's square along the rank.
    fn rook_check() -> Board {
        Board::new(vec![
            piece(0, Side::White, PieceKind::King, 4, 0),
            piece(1, Side::White, PieceKind::Rook, 0, 5),
            piece(2, Side::Black, PieceKind::King, 7, 7),
            piece(3, Side::Black, PieceKind::Rook, 4, 5),
            piece(4, Side::Black, PieceKind::Bishop, 2, 7),
        ])
    }

    #[test]
    fn start_position_is_quiet() {
        let board = Board::standard();
        assert!(king_threats(&board, Side::White).unwrap().is_empty());
        assert!(king_threats(&board, Side::Black).unwrap().is_empty());
    }

    #[test]
    fn finds_checking_piece() {
        let board = rook_check();
        assert_eq!(king_threats(&board, Side::White).unwrap(), vec![PieceId(3)]);
        assert!(king_threats(&board, Side::Black).unwrap().is_empty());
    }

    #[test]
    fn unfiltered_threats_include_defenders() {
        let board = rook_check();
        // The white rook attacks the black rook along rank 5, and the black
        // bishop defends it along the diagonal.
        assert_eq!(
            threats_to(&board, PieceId(0), Coordinate::new(4, 5)),
            vec![PieceId(1), PieceId(4)]
        );
        // Attacks need a target, so an empty square is never threatened.
        assert!(threats_to(&board, PieceId(0), Coordinate::new(3, 6)).is_empty());
    }

    #[test]
    fn single_pass_filter_matches_purged_threats() {
        let mut board = Board::standard();
        // Put every piece under scrutiny on a few squares that both sides can reach.
        for square in [
            Coordinate::new(4, 1),
            Coordinate::new(3, 6),
            Coordinate::new(5, 0),
            Coordinate::new(2, 7),
        ] {
            for side in Side::ALL {
                let excluded = board.piece_at(square).map(Piece::id).unwrap_or(PieceId(u8::MAX));
                let purged: Vec<PieceId> = threats_to(&board, excluded, square)
                    .into_iter()
                    .filter(|id| board.piece(*id).unwrap().side() != side)
                    .collect();
                assert_eq!(enemy_threats_to(&board, excluded, square, side), purged);
            }
        }
        // Still holds once pieces have left their home squares.
        let index = board.index_of(PieceId(14)).unwrap();
        let moved = board.with_trial_position(index, Coordinate::new(7, 4), |b| {
            enemy_threats_to(b, PieceId(31), Coordinate::new(5, 6), Side::Black)
        });
        assert_eq!(moved, vec![PieceId(14)]);
    }

    #[test]
    fn trial_capture_detects_defended_victim() {
        // The black pawn on (4, 1) is covered by the black rook on (0, 1).
        let mut board = Board::new(vec![
            piece(0, Side::White, PieceKind::King, 4, 0),
            piece(1, Side::Black, PieceKind::King, 7, 7),
            piece(2, Side::Black, PieceKind::Pawn, 4, 1),
            piece(3, Side::Black, PieceKind::Rook, 0, 1),
        ]);
        let king = board.index_of(PieceId(0)).unwrap();
        let pawn = board.index_of(PieceId(2)).unwrap();
        assert!(capture_exposes_king(&mut board, king, pawn, Side::White).unwrap());
        assert_eq!(board.len(), 4);
        assert_eq!(board.piece(PieceId(2)).unwrap().position(), Coordinate::new(4, 1));
        assert_eq!(board.piece(PieceId(0)).unwrap().position(), Coordinate::new(4, 0));

        // Without the rook the pawn is free to take.
        board.remove(PieceId(3));
        assert!(!capture_exposes_king(&mut board, king, pawn, Side::White).unwrap());
    }

    #[test]
    fn missing_king_is_fatal() {
        let board = Board::new(vec![piece(0, Side::White, PieceKind::King, 4, 0)]);
        assert_eq!(
            king_threats(&board, Side::Black),
            Err(GameError::KingMissing(Side::Black))
        );
    }

    #[test]
    fn trial_move_detects_pin() {
        // The white bishop on (4, 2) is pinned against its king by the black rook.
        let mut board = Board::new(vec![
            piece(0, Side::White, PieceKind::King, 4, 0),
            piece(1, Side::White, PieceKind::Bishop, 4, 2),
            piece(2, Side::Black, PieceKind::King, 7, 7),
            piece(3, Side::Black, PieceKind::Rook, 4, 6),
        ]);
        let index = board.index_of(PieceId(1)).unwrap();
        assert!(exposes_king(&mut board, index, Coordinate::new(5, 3), Side::White).unwrap());
        assert_eq!(
            board.piece(PieceId(1)).unwrap().position(),
            Coordinate::new(4, 2)
        );
    }
}
