use super::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_startpos_enumeration_starts_with_knight_on_b1() {
    // Squares are scanned from a1 upward, so the b1 knight's moves come first.
    let moves = legal_moves(&Position::startpos());
    assert_eq!(moves[0].to_string(), "b1c3");
    assert_eq!(moves[1].to_string(), "b1a3");
}

#[test]
fn test_kiwipete_moves() {
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_promotions_generate_four_moves() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let promos: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.promo.is_some())
        .collect();
    assert_eq!(promos.len(), 4);
    assert_eq!(promos[0].to_string(), "e7e8q");
}

#[test]
fn test_has_legal_move() {
    assert!(has_legal_move(&Position::startpos()));
    let stalemate = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!has_legal_move(&stalemate));
}

#[test]
fn test_en_passant_needs_an_enemy_pawn_to_take() {
    // d6 is a well-formed target, but the piece beside the white pawn is a knight.
    let pos = Position::from_fen("4k3/8/8/3nP3/8/8/8/4K3 w - d6 0 1").unwrap();
    assert!(legal_moves(&pos).iter().all(|m| !m.is_en_passant));

    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let ep: Vec<_> = legal_moves(&pos).into_iter().filter(|m| m.is_en_passant).collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].to_string(), "e5d6");
}
