//! Minimax search with alpha-beta pruning
//!
//! Two explicit roles alternate by ply: the maximizer (White's perspective)
//! and the minimizer. The role is passed down as a flag rather than read
//! from the position, so caller and position must agree.
//!
//! The root driver always maximizes and hands every root move a fresh
//! `(ROOT_ALPHA, ROOT_BETA)` window. Bounds are never shared between sibling
//! root moves, only inside each child subtree.

use std::ops::{Deref, DerefMut};

use thiserror::Error;
use tracing::{debug, trace};

use crate::eval::evaluate;
use crate::position::SearchPosition;
use crate::score::{NEG_INF, POS_INF, ROOT_ALPHA, ROOT_BETA};

/// Precondition violations. The search reports these instead of letting a
/// sentinel score escape as if it were an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("move selection needs a depth of at least 1")]
    ZeroDepth,
    #[error("the game is already over")]
    GameOver,
    #[error("position reports no legal moves but is not game over")]
    NoLegalMoves,
}

/// Counters collected during one search. They never influence the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions entered, the root excluded.
    pub nodes: u64,
    /// Positions scored by the evaluator.
    pub leaves: u64,
    /// Nodes whose remaining moves were pruned.
    pub cutoffs: u64,
}

/// The move chosen at the root and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove<M> {
    pub mv: M,
    pub score: i32,
}

/// Applies a move on construction and undoes it on drop, so the position is
/// restored on every exit path: normal return, cutoff `break`, or `?`.
struct MoveGuard<'a, P: SearchPosition> {
    pos: &'a mut P,
}

impl<'a, P: SearchPosition> MoveGuard<'a, P> {
    fn apply(pos: &'a mut P, mv: P::Move) -> Self {
        pos.apply(mv);
        Self { pos }
    }
}

impl<P: SearchPosition> Deref for MoveGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.pos
    }
}

impl<P: SearchPosition> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.pos
    }
}

impl<P: SearchPosition> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) {
        self.pos.undo();
    }
}

/// Runs searches and accumulates `SearchStats` across them.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Picks the root move with the strictly greatest score; ties keep the
    /// move enumerated first.
    ///
    /// The root always maximizes, whichever side is to move.
    pub fn find_best_move<P: SearchPosition>(
        &mut self,
        pos: &mut P,
        depth: u8,
    ) -> Result<BestMove<P::Move>, SearchError> {
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        if pos.is_game_over() {
            return Err(SearchError::GameOver);
        }

        let mut best: Option<BestMove<P::Move>> = None;
        let mut best_score = NEG_INF;

        for mv in pos.legal_moves() {
            let score = {
                let mut child = MoveGuard::apply(pos, mv);
                self.stats.nodes += 1;
                self.search(&mut *child, depth - 1, ROOT_ALPHA, ROOT_BETA, false)?
            };
            trace!(?mv, score, "root move scored");

            if score > best_score {
                best_score = score;
                best = Some(BestMove { mv, score });
            }
        }

        debug!(
            depth,
            best = ?best.map(|b| b.mv),
            score = best_score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "root search finished"
        );
        best.ok_or(SearchError::NoLegalMoves)
    }

    /// Minimax value of `pos` searched `depth` plies deep inside the window
    /// `(alpha, beta)`.
    ///
    /// `maximizing` selects the role of the side to move at this node.
    pub fn search<P: SearchPosition>(
        &mut self,
        pos: &mut P,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, SearchError> {
        if depth == 0 || pos.is_game_over() {
            self.stats.leaves += 1;
            return Ok(evaluate(pos));
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let mut best = if maximizing { NEG_INF } else { POS_INF };
        for mv in moves {
            let score = {
                let mut child = MoveGuard::apply(pos, mv);
                self.stats.nodes += 1;
                self.search(&mut *child, depth - 1, alpha, beta, !maximizing)?
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        Ok(best)
    }
}

/// Minimax value of `pos`; see [`Searcher::search`].
pub fn search<P: SearchPosition>(
    pos: &mut P,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> Result<i32, SearchError> {
    Searcher::new().search(pos, depth, alpha, beta, maximizing)
}

/// Best root move of `pos`; see [`Searcher::find_best_move`].
pub fn find_best_move<P: SearchPosition>(
    pos: &mut P,
    depth: u8,
) -> Result<BestMove<P::Move>, SearchError> {
    Searcher::new().find_best_move(pos, depth)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
