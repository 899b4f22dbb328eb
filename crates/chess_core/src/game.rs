//! A position together with the moves that led to it.
//!
//! `Game` is the stateful collaborator used by the search: it supports
//! `push`/`pop` with exact restoration and answers every termination query
//! (checkmate, stalemate, insufficient material, move-count rules and
//! repetition) from its own history.

use std::fmt;

use crate::board::{Position, Undo};
use crate::error::FenError;
use crate::movegen::{has_legal_move, legal_moves};
use crate::types::*;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub termination: Termination,
    /// `None` for draws.
    pub winner: Option<Color>,
}

impl Outcome {
    /// PGN result token: `1-0`, `0-1` or `1/2-1/2`.
    pub fn result(&self) -> &'static str {
        match self.winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.result(), self.termination)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Ply {
    mv: Move,
    undo: Undo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    stack: Vec<Ply>,
    /// Hash of every position reached, the current one last.
    hashes: Vec<u64>,
}

impl Game {
    pub fn new(position: Position) -> Self {
        let hashes = vec![position.position_hash()];
        Self {
            position,
            stack: Vec::new(),
            hashes,
        }
    }

    pub fn startpos() -> Self {
        Self::new(Position::startpos())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::new)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Moves played since construction, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.stack.iter().map(|ply| ply.mv)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    /// Plays `mv`, which must be legal in the current position.
    pub fn push(&mut self, mv: Move) {
        let undo = self.position.make_move(mv);
        self.stack.push(Ply { mv, undo });
        self.hashes.push(self.position.position_hash());
    }

    /// Takes back the most recent move, returning it.
    pub fn pop(&mut self) -> Option<Move> {
        let Ply { mv, undo } = self.stack.pop()?;
        self.hashes.pop();
        self.position.unmake_move(mv, undo);
        Some(mv)
    }

    pub fn piece_count(&self, kind: PieceKind, color: Color) -> u32 {
        self.position.piece_count(kind, color)
    }

    pub fn is_check(&self) -> bool {
        self.position.in_check(self.position.side_to_move)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !has_legal_move(&self.position)
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !has_legal_move(&self.position)
    }

    /// Neither side can possibly deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        Color::ALL
            .into_iter()
            .all(|color| self.has_insufficient_material(color))
    }

    /// True if `color` cannot mate by any sequence of legal moves, counting
    /// help from the opponent's own pieces (self-mate patterns).
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let pos = &self.position;
        let count = |kind, c| pos.piece_count(kind, c);
        let opponent = color.other();

        let heavy = [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen];
        if heavy.into_iter().any(|kind| count(kind, color) > 0) {
            return false;
        }

        let knights = count(PieceKind::Knight, color);
        let bishops = count(PieceKind::Bishop, color);

        if knights > 0 {
            // A lone knight, and the opponent has nothing to block its own king with.
            let own_pieces = knights + bishops;
            let opponent_blockers = count(PieceKind::Pawn, opponent)
                + count(PieceKind::Knight, opponent)
                + count(PieceKind::Bishop, opponent)
                + count(PieceKind::Rook, opponent);
            return own_pieces == 1 && opponent_blockers == 0;
        }

        if bishops > 0 {
            // Every bishop on the board shares one square colour, and no pawns or knights.
            let mut light = false;
            let mut dark = false;
            for (s, pc) in pos.board.iter().enumerate() {
                if let Some(pc) = pc
                    && pc.kind == PieceKind::Bishop
                {
                    if is_dark_square(s as u8) {
                        dark = true;
                    } else {
                        light = true;
                    }
                }
            }
            let pawns_or_knights = Color::ALL
                .into_iter()
                .any(|c| count(PieceKind::Pawn, c) + count(PieceKind::Knight, c) > 0);
            return !(light && dark) && !pawns_or_knights;
        }

        true
    }

    /// Claimable draw: 100 halfmoves without a capture or pawn move.
    pub fn is_fifty_moves(&self) -> bool {
        self.position.is_fifty_move_draw()
    }

    /// Automatic draw: 150 halfmoves without a capture or pawn move.
    pub fn is_seventyfive_moves(&self) -> bool {
        self.position.halfmove_clock >= 150
    }

    fn repetitions(&self) -> usize {
        let current = self.position.position_hash();
        self.hashes.iter().filter(|&&h| h == current).count()
    }

    /// Claimable draw: current position has occurred at least three times.
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetitions() >= 3
    }

    /// Automatic draw: current position has occurred at least five times.
    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= 5
    }

    /// How the game ended, if it has. Claimable draws do not end the game.
    pub fn outcome(&self) -> Option<Outcome> {
        let can_move = has_legal_move(&self.position);
        if !can_move && self.is_check() {
            return Some(Outcome {
                termination: Termination::Checkmate,
                winner: Some(self.position.side_to_move.other()),
            });
        }

        let termination = if self.is_insufficient_material() {
            Termination::InsufficientMaterial
        } else if !can_move {
            Termination::Stalemate
        } else if self.is_seventyfive_moves() {
            Termination::SeventyFiveMoves
        } else if self.is_fivefold_repetition() {
            Termination::FivefoldRepetition
        } else {
            return None;
        };
        Some(Outcome {
            termination,
            winner: None,
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// PGN result token, `*` while the game is still running.
    pub fn result(&self) -> &'static str {
        self.outcome().map_or("*", |o| o.result())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.position, f)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
