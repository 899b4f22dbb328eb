//! The capabilities the search needs from a game position.

use std::fmt::Debug;

use chess_core::{Color, Game, Move, PieceKind};

/// A mutable game state the search can walk with apply/undo.
///
/// `undo` must reverse the most recent `apply` exactly, including side to
/// move and every piece of hidden state the implementation keeps, and
/// `legal_moves` must enumerate in a deterministic order.
pub trait SearchPosition {
    type Move: Copy + PartialEq + Debug;

    fn side_to_move(&self) -> Color;

    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;
    /// Any termination the implementation recognises, not only the three above.
    fn is_game_over(&self) -> bool;

    fn legal_moves(&self) -> Vec<Self::Move>;
    fn apply(&mut self, mv: Self::Move);
    fn undo(&mut self);

    /// Number of pieces of `kind` owned by `color`.
    fn count(&self, kind: PieceKind, color: Color) -> u32;
}

impl SearchPosition for Game {
    type Move = Move;

    fn side_to_move(&self) -> Color {
        Game::side_to_move(self)
    }

    fn is_checkmate(&self) -> bool {
        Game::is_checkmate(self)
    }

    fn is_stalemate(&self) -> bool {
        Game::is_stalemate(self)
    }

    fn is_insufficient_material(&self) -> bool {
        Game::is_insufficient_material(self)
    }

    fn is_game_over(&self) -> bool {
        Game::is_game_over(self)
    }

    fn legal_moves(&self) -> Vec<Move> {
        Game::legal_moves(self)
    }

    fn apply(&mut self, mv: Move) {
        self.push(mv);
    }

    fn undo(&mut self) {
        self.pop();
    }

    fn count(&self, kind: PieceKind, color: Color) -> u32 {
        self.piece_count(kind, color)
    }
}
