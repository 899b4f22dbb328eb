//! Material-based position evaluation

use chess_core::{Color, PieceKind};

use crate::position::SearchPosition;
use crate::score::{Decisive, Evaluation};

/// Material values in pawns, indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, 0];

/// Returns the material value of a piece in pawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Classifies the position without collapsing it to a number.
///
/// Checkmate is signed by the side to move: if White is to move and mated
/// Black has won, and the other way round. Stalemate and insufficient
/// material are draws. Every other position, including ones drawn by
/// repetition or move counts, is scored on material.
pub fn classify<P: SearchPosition>(pos: &P) -> Evaluation {
    if pos.is_checkmate() {
        return Evaluation::Decisive(match pos.side_to_move() {
            Color::White => Decisive::BlackWins,
            Color::Black => Decisive::WhiteWins,
        });
    }
    if pos.is_stalemate() || pos.is_insufficient_material() {
        return Evaluation::Decisive(Decisive::Draw);
    }
    Evaluation::Material(material_balance(pos))
}

/// Evaluates the position from White's perspective.
///
/// Returns `WIN_SCORE` / `-WIN_SCORE` for mates, `0` for stalemate and
/// insufficient material, otherwise White material minus Black material.
pub fn evaluate<P: SearchPosition>(pos: &P) -> i32 {
    classify(pos).score()
}

/// White material minus Black material.
pub fn material_balance<P: SearchPosition>(pos: &P) -> i32 {
    PieceKind::ALL
        .into_iter()
        .map(|kind| {
            let white = pos.count(kind, Color::White) as i32;
            let black = pos.count(kind, Color::Black) as i32;
            piece_value(kind) * (white - black)
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
