//! Termination detection through the `Game` API
//!
//! - Checkmate and stalemate
//! - Insufficient material, including the self-mate refinements
//! - Repetition keys

use chess_core::{Color, Game, Position, Termination};

fn game(fen: &str) -> Game {
    Game::from_fen(fen).unwrap()
}

// =============================================================================
// Stalemate and checkmate
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    let g = game("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(g.legal_moves().is_empty());
    assert!(g.is_stalemate());
    assert!(!g.is_checkmate());
    assert_eq!(g.result(), "1/2-1/2");
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let g = game("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(g.is_stalemate());
    assert_eq!(
        g.outcome().map(|o| o.termination),
        Some(Termination::Stalemate)
    );
}

#[test]
fn test_scholars_mate_is_checkmate() {
    let g = game("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(g.is_checkmate());
    assert!(!g.is_stalemate());
    assert_eq!(g.outcome().and_then(|o| o.winner), Some(Color::White));
    assert_eq!(g.result(), "1-0");
}

#[test]
fn test_check_is_not_checkmate() {
    let g = game("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    assert!(g.is_check());
    assert!(!g.is_checkmate());
    assert!(!g.is_game_over());
}

// =============================================================================
// Insufficient material
// =============================================================================

#[test]
fn test_insufficient_material_minor_piece_endings() {
    for fen in [
        "8/8/8/4k3/8/4K3/8/8 w - - 0 1",       // K vs K
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",      // K+B vs K
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",      // K+N vs K
        "8/8/4b3/4k3/8/4K3/8/8 w - - 0 1",     // K vs K+B
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",     // K vs K+N
        "5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1",   // same-coloured bishops
    ] {
        assert!(game(fen).is_insufficient_material(), "{fen}");
        assert!(game(fen).is_game_over(), "{fen}");
    }
}

#[test]
fn test_sufficient_material() {
    for fen in [
        "2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1",   // opposite-coloured bishops
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",     // pawn
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",     // rook
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",     // queen
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",    // two knights
        "8/8/4b3/4k3/8/4KN2/8/8 w - - 0 1",    // knight vs bishop allows self-mate
    ] {
        assert!(!game(fen).is_insufficient_material(), "{fen}");
    }
}

#[test]
fn test_lone_knight_against_queen_cannot_mate() {
    let g = game("8/8/4q3/4k3/8/4KN2/8/8 w - - 0 1");
    assert!(g.has_insufficient_material(Color::White));
    assert!(!g.has_insufficient_material(Color::Black));
    assert!(!g.is_insufficient_material());
}

// =============================================================================
// Repetition keys
// =============================================================================

#[test]
fn test_position_hash_different_side_to_move() {
    let w = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let b = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1").unwrap();
    assert_ne!(w.position_hash(), b.position_hash());
}

#[test]
fn test_position_hash_different_castling_rights() {
    let all = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let some = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
    assert_ne!(all.position_hash(), some.position_hash());
}

#[test]
fn test_position_hash_different_en_passant() {
    let ep = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
    let none = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
    assert_ne!(ep.position_hash(), none.position_hash());
}
