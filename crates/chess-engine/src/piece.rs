//! Live pieces and their attack rules.

use std::fmt;

use chess_core::{Coordinate, PieceKind, Side};

use crate::rays::{self, Ray};
use crate::Board;

/// Identity of a piece, unique for the lifetime of a game.
///
/// A promoted pawn keeps its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u8);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board together with the rays it moves and attacks along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    side: Side,
    kind: PieceKind,
    position: Coordinate,
    move_rays: Vec<Ray>,
    attack_rays: Vec<Ray>,
}

impl Piece {
    /// Creates a piece with the ray tables of its kind.
    ///
    /// Pawns start with the two-step advance available.
    pub fn new(id: PieceId, side: Side, kind: PieceKind, position: Coordinate) -> Self {
        Piece {
            id,
            side,
            kind,
            position,
            move_rays: rays::move_rays(kind, side),
            attack_rays: rays::attack_rays(kind, side),
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Rays this piece moves along, nearest square first.
    pub fn move_rays(&self) -> &[Ray] {
        &self.move_rays
    }

    /// Rays this piece captures along, nearest square first.
    pub fn attack_rays(&self) -> &[Ray] {
        &self.attack_rays
    }

    pub(crate) fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }

    /// Relocates the piece after a committed move.
    ///
    /// A pawn's two-step advance is a one-time right, so its move rays
    /// collapse to a single forward step.
    pub(crate) fn commit_move(&mut self, target: Coordinate) {
        self.position = target;
        if self.kind == PieceKind::Pawn {
            self.move_rays = rays::advanced_pawn_rays(self.side);
        }
    }

    /// Returns true if this is a pawn standing on its promotion rank.
    pub fn should_promote(&self) -> bool {
        self.kind == PieceKind::Pawn && self.position.rank == self.side.promotion_rank()
    }

    /// Turns this piece into a queen in place, keeping id, side and position.
    pub(crate) fn promote(&mut self) {
        *self = Piece::new(self.id, self.side, PieceKind::Queen, self.position);
    }

    /// Returns the squares this piece can capture on.
    ///
    /// Each attack ray yields at most its first occupied square. With
    /// `friendly_fire` set, squares holding pieces of the same side count as
    /// targets too, which is how defended squares are found.
    pub fn legal_attacks(&self, board: &Board, friendly_fire: bool) -> Vec<Coordinate> {
        let mut attacks = Vec::new();
        if self.position.is_out_of_bounds() {
            return attacks;
        }

        for ray in &self.attack_rays {
            for &offset in ray {
                let target = self.position + offset;
                if target.is_out_of_bounds() {
                    break;
                }
                let Some(occupant) = board.piece_at(target) else {
                    continue;
                };
                if occupant.id == self.id {
                    continue;
                }
                if occupant.side == self.side && !friendly_fire {
                    break;
                }
                attacks.push(target);
                break;
            }
        }

        attacks
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.abbreviation())
    }
}
