//! Movement and attack ray tables for every piece kind.
//!
//! A ray is one direction of travel, listed nearest square first. Sliding
//! pieces get 7-step rays; knights, kings, and pawns get single-step rays
//! (plus the unmoved pawn's two-step advance).

use chess_core::{Coordinate, PieceKind, Side};

/// Offsets along one direction, ordered nearest to farthest.
pub type Ray = Vec<Coordinate>;

/// Longest distance a slider can travel on an 8x8 board.
pub const SLIDE_LENGTH: i8 = 7;

const fn c(file: i8, rank: i8) -> Coordinate {
    Coordinate::new(file, rank)
}

/// West, east, south, north.
const ROOK_DIRECTIONS: [Coordinate; 4] = [c(-1, 0), c(1, 0), c(0, -1), c(0, 1)];

const BISHOP_DIRECTIONS: [Coordinate; 4] = [c(1, 1), c(-1, 1), c(1, -1), c(-1, -1)];

/// Clockwise from (1, 2).
const KNIGHT_STEPS: [Coordinate; 8] = [
    c(1, 2),
    c(2, 1),
    c(2, -1),
    c(1, -2),
    c(-1, -2),
    c(-2, -1),
    c(-2, 1),
    c(-1, 2),
];

/// Clockwise from north-west.
const KING_STEPS: [Coordinate; 8] = [
    c(-1, 1),
    c(0, 1),
    c(1, 1),
    c(1, 0),
    c(1, -1),
    c(0, -1),
    c(-1, -1),
    c(-1, 0),
];

fn slides(directions: &[Coordinate]) -> Vec<Ray> {
    directions
        .iter()
        .map(|&direction| (1..=SLIDE_LENGTH).map(|n| direction * n).collect())
        .collect()
}

fn steps(offsets: &[Coordinate]) -> Vec<Ray> {
    offsets.iter().map(|&offset| vec![offset]).collect()
}

/// Returns the move rays of a freshly created piece.
pub fn move_rays(kind: PieceKind, side: Side) -> Vec<Ray> {
    match kind {
        PieceKind::Pawn => {
            let forward = c(0, side.pawn_direction());
            vec![vec![forward, forward * 2]]
        }
        _ => attack_rays(kind, side),
    }
}

/// Returns the move rays of a pawn that has already made its first move.
pub fn advanced_pawn_rays(side: Side) -> Vec<Ray> {
    vec![vec![c(0, side.pawn_direction())]]
}

/// Returns the attack rays of a piece.
pub fn attack_rays(kind: PieceKind, side: Side) -> Vec<Ray> {
    match kind {
        PieceKind::Pawn => {
            let direction = side.pawn_direction();
            steps(&[c(-1, direction), c(1, direction)])
        }
        PieceKind::Knight => steps(&KNIGHT_STEPS),
        PieceKind::Bishop => slides(&BISHOP_DIRECTIONS),
        PieceKind::Rook => slides(&ROOK_DIRECTIONS),
        PieceKind::Queen => {
            let mut rays = slides(&BISHOP_DIRECTIONS);
            rays.extend(slides(&ROOK_DIRECTIONS));
            rays
        }
        PieceKind::King => steps(&KING_STEPS),
    }
}
