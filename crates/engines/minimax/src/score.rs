//! Score constants and the tagged evaluation form.
//!
//! Scores are always from White's point of view: positive favours White.
//! Material scores stay strictly inside `(-WIN_SCORE, WIN_SCORE)` and the
//! search sentinels stay strictly outside it.

use std::fmt;

/// Score of a position where White has mated Black.
pub const WIN_SCORE: i32 = 9999;

/// Initial best score of a maximizing node.
pub const NEG_INF: i32 = -99_999;
/// Initial best score of a minimizing node.
pub const POS_INF: i32 = 99_999;

/// Lower bound of the fresh window every root child is searched with.
pub const ROOT_ALPHA: i32 = -100_000;
/// Upper bound of the fresh window every root child is searched with.
pub const ROOT_BETA: i32 = 100_000;

/// A game-ending result as seen by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decisive {
    /// Black is to move and mated.
    WhiteWins,
    /// White is to move and mated.
    BlackWins,
    /// Stalemate or insufficient material.
    Draw,
}

/// Static evaluation before it is collapsed to a plain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Decisive(Decisive),
    /// White material minus Black material, in pawns.
    Material(i32),
}

impl Evaluation {
    /// Collapses to the signed score the search compares.
    pub fn score(self) -> i32 {
        match self {
            Evaluation::Decisive(Decisive::WhiteWins) => WIN_SCORE,
            Evaluation::Decisive(Decisive::BlackWins) => -WIN_SCORE,
            Evaluation::Decisive(Decisive::Draw) => 0,
            Evaluation::Material(balance) => balance,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Decisive(Decisive::WhiteWins) => f.write_str("White mates"),
            Evaluation::Decisive(Decisive::BlackWins) => f.write_str("Black mates"),
            Evaluation::Decisive(Decisive::Draw) => f.write_str("draw"),
            Evaluation::Material(balance) => write!(f, "{balance:+}"),
        }
    }
}

/// Describes a score returned by the search for display.
pub fn describe_score(score: i32) -> String {
    match score {
        WIN_SCORE => "White mates".to_string(),
        s if s == -WIN_SCORE => "Black mates".to_string(),
        s => format!("{s:+}"),
    }
}
