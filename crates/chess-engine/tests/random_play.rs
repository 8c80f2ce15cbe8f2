//! Random games driven through the public API.

use std::collections::HashSet;

use chess_core::Coordinate;
use chess_engine::{Game, MoveOutcome, PieceId};
use proptest::prelude::*;

/// Plays one random legal move for the side to move.
///
/// Returns `false` when the game cannot continue.
fn play_random(game: &mut Game, piece_seed: usize, target_seed: usize) -> bool {
    let own: Vec<PieceId> = game
        .board()
        .pieces_of(game.turn())
        .map(|p| p.id())
        .collect();

    let mut candidates: Vec<(Coordinate, Coordinate)> = Vec::new();
    for offset in 0..own.len() {
        let id = own[(piece_seed + offset) % own.len()];
        let from = game.piece(id).unwrap().position();
        let legal = game.legal_moves(id).unwrap();
        for target in legal.moves.iter().chain(&legal.attacks) {
            assert!(!target.is_out_of_bounds(), "{} generated {}", id, target);
            candidates.push((from, *target));
        }
        if !candidates.is_empty() {
            break;
        }
    }

    if candidates.is_empty() {
        return false;
    }
    let (from, to) = candidates[target_seed % candidates.len()];
    let count = game.pieces().len();
    let turn = game.turn();

    match game.move_piece(from, to) {
        Ok(outcome @ MoveOutcome::Moved { .. }) => {
            assert_eq!(game.pieces().len(), count);
            assert_eq!(game.piece_at(to).map(|p| p.id()), Some(piece_of(&outcome)));
        }
        Ok(outcome @ MoveOutcome::Captured { .. }) => {
            assert_eq!(game.pieces().len(), count - 1);
            assert_eq!(game.piece_at(to).map(|p| p.id()), Some(piece_of(&outcome)));
        }
        Ok(MoveOutcome::Rejected(rejection)) => {
            panic!("generated move {} -> {} was rejected: {}", from, to, rejection)
        }
        Err(err) => panic!("unexpected error: {}", err),
    }
    assert_eq!(game.turn(), turn.opposite());
    !game.is_checkmate()
}

fn piece_of(outcome: &MoveOutcome) -> PieceId {
    match outcome {
        MoveOutcome::Moved { piece, .. } | MoveOutcome::Captured { piece, .. } => *piece,
        MoveOutcome::Rejected(_) => unreachable!(),
    }
}

fn assert_consistent(game: &Game) {
    let mut ids = HashSet::new();
    let mut squares = HashSet::new();
    for piece in game.pieces() {
        assert!(piece.position().is_on_board());
        assert!(ids.insert(piece.id()), "duplicate id {}", piece.id());
        assert!(squares.insert(piece.position()), "shared square {}", piece.position());
    }
    assert_eq!(game.in_check(), !game.threats().is_empty());
    for &threat in game.threats() {
        let threat = game.piece(threat).unwrap();
        assert_ne!(threat.side(), game.turn());
    }
    if game.is_checkmate() {
        assert!(game.in_check());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_games_keep_invariants(
        seeds in prop::collection::vec((0usize..64, 0usize..64), 1..40)
    ) {
        let mut game = Game::new();
        for (piece_seed, target_seed) in seeds {
            if !play_random(&mut game, piece_seed, target_seed) {
                break;
            }
            assert_consistent(&game);
        }
    }

    #[test]
    fn legal_move_queries_leave_the_game_unchanged(
        seeds in prop::collection::vec((0usize..64, 0usize..64), 0..12)
    ) {
        let mut game = Game::new();
        for (piece_seed, target_seed) in seeds {
            if !play_random(&mut game, piece_seed, target_seed) {
                break;
            }
        }

        let before = game.clone();
        let ids: Vec<PieceId> = game.pieces().iter().map(|p| p.id()).collect();
        for id in ids {
            game.legal_moves(id).unwrap();
        }
        prop_assert_eq!(game, before);
    }
}
