use super::*;
use crate::uci::parse_uci_move;

fn play(game: &mut Game, moves: &[&str]) {
    for txt in moves {
        let mv = parse_uci_move(game.position(), txt).unwrap();
        game.push(mv);
    }
}

#[test]
fn test_push_pop_restores_game() {
    let original = Game::startpos();
    let mut game = original.clone();
    play(&mut game, &["e2e4", "d7d5", "e4d5", "d8d5"]);
    assert_eq!(game.moves().count(), 4);

    while game.pop().is_some() {}
    assert_eq!(game, original);
    assert_eq!(game.pop(), None);
}

#[test]
fn test_fools_mate_outcome() {
    let mut game = Game::startpos();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(game.is_checkmate());
    assert!(!game.is_stalemate());
    assert!(game.is_game_over());
    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.termination, Termination::Checkmate);
    assert_eq!(outcome.winner, Some(Color::Black));
    assert_eq!(game.result(), "0-1");
}

#[test]
fn test_running_game_has_no_result() {
    let game = Game::startpos();
    assert!(!game.is_game_over());
    assert_eq!(game.outcome(), None);
    assert_eq!(game.result(), "*");
}

#[test]
fn test_repetition_counts() {
    let mut game = Game::startpos();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

    play(&mut game, &shuffle);
    play(&mut game, &shuffle);
    assert!(game.is_threefold_repetition());
    assert!(!game.is_fivefold_repetition());
    assert!(!game.is_game_over(), "threefold is only claimable");

    play(&mut game, &shuffle);
    play(&mut game, &shuffle);
    assert!(game.is_fivefold_repetition());
    assert_eq!(
        game.outcome().map(|o| o.termination),
        Some(Termination::FivefoldRepetition)
    );
    assert_eq!(game.result(), "1/2-1/2");

    game.pop();
    assert!(!game.is_fivefold_repetition());
}

#[test]
fn test_move_count_rules() {
    let fen_at = |clock: u32| format!("4k3/8/8/8/8/8/4P3/R3K3 w - - {clock} 90");

    let game = Game::from_fen(&fen_at(100)).unwrap();
    assert!(game.is_fifty_moves());
    assert!(!game.is_seventyfive_moves());
    assert!(!game.is_game_over(), "fifty-move draw is only claimable");

    let game = Game::from_fen(&fen_at(150)).unwrap();
    assert!(game.is_seventyfive_moves());
    assert_eq!(
        game.outcome().map(|o| o.termination),
        Some(Termination::SeventyFiveMoves)
    );
}

#[test]
fn test_stalemate_with_insufficient_material_reports_material() {
    // K+B vs K with Black stalemated in the corner.
    let game = Game::from_fen("k7/8/1K6/8/8/8/7B/8 b - - 0 1").unwrap();
    assert!(game.is_stalemate());
    assert!(game.is_insufficient_material());
    assert_eq!(
        game.outcome().map(|o| o.termination),
        Some(Termination::InsufficientMaterial)
    );
}
