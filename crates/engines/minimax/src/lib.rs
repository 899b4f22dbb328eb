//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning and a material evaluator.
//! Scores are from White's point of view at every node.

mod eval;
mod position;
mod score;
mod search;

use chess_core::{Game, Move};
use tracing::info;

pub use eval::{classify, evaluate, material_balance, piece_value};
pub use position::SearchPosition;
pub use score::{
    Decisive, Evaluation, NEG_INF, POS_INF, ROOT_ALPHA, ROOT_BETA, WIN_SCORE, describe_score,
};
pub use search::{BestMove, SearchError, SearchStats, Searcher, find_best_move, search};

/// Depth used when none is configured.
pub const DEFAULT_DEPTH: u8 = 6;

/// Outcome of one engine search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Move,
    pub score: i32,
    pub depth: u8,
    pub stats: SearchStats,
}

/// Minimax engine searching every move to the same depth.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    searcher: Searcher,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            searcher: Searcher::new(),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    /// Searches `game` and returns the chosen move. The game is left as it was.
    ///
    /// Fails with `SearchError::GameOver` if there is nothing to play.
    pub fn search(&mut self, game: &mut Game) -> Result<SearchReport, SearchError> {
        self.searcher.reset_stats();
        let best = self.searcher.find_best_move(game, self.depth)?;
        let stats = self.searcher.stats();

        let report = SearchReport {
            best_move: best.mv,
            score: best.score,
            depth: self.depth,
            stats,
        };
        info!(
            depth = report.depth,
            best = %report.best_move,
            score = report.score,
            nodes = stats.nodes,
            "search complete"
        );
        Ok(report)
    }

    pub fn name(&self) -> &str {
        "Minimax v1.0"
    }

    pub fn author(&self) -> &str {
        "ML-chess"
    }

    pub fn new_game(&mut self) {
        self.searcher.reset_stats();
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
