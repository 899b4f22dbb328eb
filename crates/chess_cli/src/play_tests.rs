use std::io::Cursor;

use super::*;

const ITALIAN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

fn run(
    fen: &str,
    depth: u8,
    human_white: Option<bool>,
    input: &str,
) -> (Result<&'static str>, String) {
    let mut game = Game::from_fen(fen).unwrap();
    let mut engine = MinimaxEngine::new(depth);
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();
    let result = play_game(&mut input, &mut output, &mut game, &mut engine, human_white);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_human_delivers_mate() {
    let (result, transcript) = run(ITALIAN, 1, None, "y\nh5f7\n");
    assert_eq!(result.unwrap(), "1-0");
    assert!(transcript.starts_with("Welcome to Chess AI (Minimax + Alpha-Beta Pruning)\n"));
    assert!(transcript.contains("Search depth fixed at 1 moves."));
    assert!(transcript.contains("Do you want to play as White and move first? (y/n): "));
    assert!(transcript.contains("Board after your move:"));
    assert!(transcript.ends_with("\nGame Over: 1-0\n"));
}

#[test]
fn test_bad_input_is_reported_and_reprompted() {
    let (result, transcript) = run(ITALIAN, 1, Some(true), "hello\ne2e5\nh5f7\n");
    assert_eq!(result.unwrap(), "1-0");
    assert_eq!(transcript.matches("Invalid format. Try again.").count(), 1);
    assert_eq!(transcript.matches("Illegal move. Try again.").count(), 1);
    assert_eq!(transcript.matches("Your move (UCI format, e.g. e2e4): ").count(), 3);
}

#[test]
fn test_engine_delivers_mate() {
    let (result, transcript) = run(ITALIAN, 2, None, "n\n");
    assert_eq!(result.unwrap(), "1-0");
    assert!(transcript.contains("AI plays: h5f7"));
}

#[test]
fn test_finished_game_prints_result_only() {
    let mated = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    let (result, transcript) = run(mated, 1, Some(true), "");
    assert_eq!(result.unwrap(), "0-1");
    assert!(!transcript.contains("Your move"));
}

#[test]
fn test_closed_input_is_an_error() {
    let (result, _) = run(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        1,
        None,
        "y\n",
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("input closed"), "{err}");
}
