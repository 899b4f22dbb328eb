use super::*;

#[test]
fn test_engine_reports_mate() {
    let mut game =
        Game::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
            .unwrap();
    let before = game.clone();
    let mut engine = MinimaxEngine::new(2);

    let report = engine.search(&mut game).unwrap();

    assert_eq!(report.best_move.to_string(), "h5f7");
    assert_eq!(report.score, WIN_SCORE);
    assert_eq!(report.depth, 2);
    assert!(report.stats.nodes > 0);
    assert_eq!(game, before);
}

#[test]
fn test_stats_reset_between_searches() {
    let mut game = Game::startpos();
    let mut engine = MinimaxEngine::new(2);
    let first = engine.search(&mut game).unwrap();
    let second = engine.search(&mut game).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_game_over_is_an_error() {
    let mut game =
        Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    let mut engine = MinimaxEngine::default();
    assert_eq!(engine.depth(), DEFAULT_DEPTH);
    assert_eq!(engine.search(&mut game), Err(SearchError::GameOver));
}

#[test]
fn test_zero_depth_is_an_error() {
    let mut engine = MinimaxEngine::default();
    engine.set_depth(0);
    assert_eq!(engine.depth(), 0);
    assert_eq!(
        engine.search(&mut Game::startpos()),
        Err(SearchError::ZeroDepth)
    );
}
