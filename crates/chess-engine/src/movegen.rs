//! Legal move and capture generation.
//!
//! Moves are found by walking each move ray outward from the piece. A step
//! is legal when it is on the board, unoccupied, and does not leave the
//! mover's own king in check; the first failing step ends the ray. King
//! safety is tested by relocating the piece, recomputing check, and
//! restoring it, always, not only while in check. Captures get the same
//! test with the victim lifted off the board for the trial.
//!
//! Functions taking `threats` treat an empty slice as "not in check".

use chess_core::{Coordinate, PieceKind};

use crate::check;
use crate::{Board, GameError, PieceId};

/// The destinations available to one piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    /// Empty squares the piece can move to.
    pub moves: Vec<Coordinate>,
    /// Squares holding enemy pieces the piece can capture.
    pub attacks: Vec<Coordinate>,
}

impl LegalMoves {
    /// Total number of moves and captures.
    pub fn len(&self) -> usize {
        self.moves.len() + self.attacks.len()
    }

    /// Returns true if the piece has nothing to play.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.attacks.is_empty()
    }
}

fn index_of(board: &Board, id: PieceId) -> Result<usize, GameError> {
    board.index_of(id).ok_or(GameError::UnknownPiece(id))
}

/// Returns the moves of piece `id` ignoring any current check.
pub fn legal_moves(board: &mut Board, id: PieceId) -> Result<Vec<Coordinate>, GameError> {
    let index = index_of(board, id)?;
    let piece = &board.pieces()[index];
    let (origin, side) = (piece.position(), piece.side());
    if origin.is_out_of_bounds() {
        return Ok(Vec::new());
    }
    let rays = piece.move_rays().to_vec();

    let mut moves = Vec::new();
    for ray in &rays {
        for &offset in ray {
            let target = origin + offset;
            if target.is_out_of_bounds() || board.is_occupied_by_other(target, id) {
                break;
            }
            if check::exposes_king(board, index, target, side)? {
                break;
            }
            moves.push(target);
        }
    }

    Ok(moves)
}

/// Returns the moves of piece `id` while its side is in check.
///
/// The ordinary moves are re-filtered: each must still be on the board,
/// empty, and must get the king out of check.
pub fn legal_check_moves(board: &mut Board, id: PieceId) -> Result<Vec<Coordinate>, GameError> {
    let candidates = legal_moves(board, id)?;
    let index = index_of(board, id)?;
    let side = board.pieces()[index].side();

    let mut moves = Vec::with_capacity(candidates.len());
    for target in candidates {
        if target.is_out_of_bounds() || board.piece_at(target).is_some() {
            continue;
        }
        if check::exposes_king(board, index, target, side)? {
            continue;
        }
        moves.push(target);
    }

    Ok(moves)
}

/// Returns the captures of piece `id` ignoring any current check.
pub fn legal_attacks(
    board: &Board,
    id: PieceId,
    friendly_fire: bool,
) -> Result<Vec<Coordinate>, GameError> {
    let piece = board.piece(id).ok_or(GameError::UnknownPiece(id))?;
    Ok(piece.legal_attacks(board, friendly_fire))
}

/// Keeps the captures in `candidates` that do not leave the capturer's own
/// king in check.
fn keep_safe_captures(
    board: &mut Board,
    id: PieceId,
    candidates: Vec<Coordinate>,
) -> Result<Vec<Coordinate>, GameError> {
    let index = index_of(board, id)?;
    let side = board.pieces()[index].side();

    let mut attacks = Vec::with_capacity(candidates.len());
    for target in candidates {
        let victim_index = board
            .pieces()
            .iter()
            .position(|p| p.position() == target)
            .ok_or(GameError::PieceNotFound(target))?;
        if !check::capture_exposes_king(board, index, victim_index, side)? {
            attacks.push(target);
        }
    }

    Ok(attacks)
}

/// Returns the captures of piece `id` ignoring any current check, minus
/// those that would leave its own king in check.
pub fn legal_safe_attacks(board: &mut Board, id: PieceId) -> Result<Vec<Coordinate>, GameError> {
    let candidates = legal_attacks(board, id, false)?;
    keep_safe_captures(board, id, candidates)
}

/// Returns the captures of piece `id` while its side is in check.
///
/// Only the checking pieces may be captured. The king must additionally not
/// land on a square covered by another enemy piece, and no capture may leave
/// the king in check.
pub fn legal_check_attacks(
    board: &mut Board,
    id: PieceId,
    threats: &[PieceId],
) -> Result<Vec<Coordinate>, GameError> {
    let piece = board.piece(id).ok_or(GameError::UnknownPiece(id))?;
    let attacks = piece.legal_attacks(board, false);

    let mut candidates = Vec::new();
    for &threat in threats {
        let threat_position = board
            .piece(threat)
            .ok_or(GameError::UnknownPiece(threat))?
            .position();

        for &attack in &attacks {
            if attack != threat_position || attack.is_out_of_bounds() {
                continue;
            }
            if piece.kind() == PieceKind::King
                && !check::enemy_threats_to(board, piece.id(), attack, piece.side()).is_empty()
            {
                continue;
            }
            candidates.push(attack);
        }
    }

    keep_safe_captures(board, id, candidates)
}

/// Returns the moves and captures of piece `id`, check-aware when `threats`
/// is non-empty.
pub fn legal_moves_for(
    board: &mut Board,
    id: PieceId,
    threats: &[PieceId],
) -> Result<LegalMoves, GameError> {
    if threats.is_empty() {
        Ok(LegalMoves {
            moves: legal_moves(board, id)?,
            attacks: legal_safe_attacks(board, id)?,
        })
    } else {
        Ok(LegalMoves {
            moves: legal_check_moves(board, id)?,
            attacks: legal_check_attacks(board, id, threats)?,
        })
    }
}

/// Returns true if piece `id` may move to the empty square `target`.
pub fn can_move(
    board: &mut Board,
    id: PieceId,
    target: Coordinate,
    threats: &[PieceId],
) -> Result<bool, GameError> {
    if threats.is_empty() {
        Ok(legal_moves(board, id)?.contains(&target))
    } else {
        Ok(!target.is_out_of_bounds() && legal_check_moves(board, id)?.contains(&target))
    }
}

/// Returns true if piece `id` may capture `victim` standing on `target`.
pub fn can_attack(
    board: &mut Board,
    id: PieceId,
    target: Coordinate,
    victim: PieceId,
    threats: &[PieceId],
) -> Result<bool, GameError> {
    if !threats.is_empty() {
        return Ok(legal_check_attacks(board, id, threats)?.contains(&target));
    }

    let attacker = board.piece(id).ok_or(GameError::UnknownPiece(id))?;
    let victim = board.piece(victim).ok_or(GameError::UnknownPiece(victim))?;
    if victim.side() == attacker.side() {
        return Ok(false);
    }
    Ok(legal_safe_attacks(board, id)?.contains(&target))
}
