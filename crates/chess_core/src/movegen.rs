//! Legal move generation.
//!
//! Pseudo-legal moves are generated square by square and then filtered by
//! playing each one and testing whether the mover's king is left attacked.
//! Generation order is deterministic for a given position: squares a1..h8,
//! and for each piece its direction tables in declaration order.

use crate::{board::Position, types::*};

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Castling descriptor: king from/to, squares that must be empty, squares
/// the king passes that must not be attacked.
struct CastleRule {
    color: Color,
    king_from: u8,
    king_to: u8,
    empty: &'static [u8],
    safe: &'static [u8],
}

const CASTLES: [CastleRule; 4] = [
    CastleRule { color: Color::White, king_from: 4, king_to: 6, empty: &[5, 6], safe: &[5, 6] },
    CastleRule { color: Color::White, king_from: 4, king_to: 2, empty: &[3, 2, 1], safe: &[3, 2] },
    CastleRule { color: Color::Black, king_from: 60, king_to: 62, empty: &[61, 62], safe: &[61, 62] },
    CastleRule { color: Color::Black, king_from: 60, king_to: 58, empty: &[59, 58, 57], safe: &[59, 58] },
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| is_legal(pos, mv, mover));
}

/// True if the side to move has at least one legal move. Stops at the first.
pub fn has_legal_move(pos: &Position) -> bool {
    let mut tmp = pos.clone();
    let mut pseudo = Vec::with_capacity(64);
    pseudo_moves(&tmp, &mut pseudo);
    let mover = tmp.side_to_move;
    pseudo.into_iter().any(|mv| is_legal(&mut tmp, mv, mover))
}

fn is_legal(pos: &mut Position, mv: Move, mover: Color) -> bool {
    let undo = pos.make_move(mv);
    let illegal = pos.in_check(mover);
    pos.unmake_move(mv, undo);
    !illegal
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let Some(pc) = pos.piece_at(from) else {
            continue;
        };
        if pc.color != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_steps(pos, from, pc.color, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => gen_slides(pos, from, pc.color, &DIAGONALS, out),
            PieceKind::Rook => gen_slides(pos, from, pc.color, &ORTHOGONALS, out),
            PieceKind::Queen => {
                gen_slides(pos, from, pc.color, &DIAGONALS, out);
                gen_slides(pos, from, pc.color, &ORTHOGONALS, out);
            }
            PieceKind::King => {
                gen_steps(pos, from, pc.color, &KING_DELTAS, out);
                gen_castles(pos, from, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        for pk in PROMOTIONS {
            let mut mv = Move::new(from, to);
            mv.promo = Some(pk);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let (dir, start_rank, promo_rank): (i8, i8, i8) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, promo_rank, out);
        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, promo_rank, out),
            None if pos.en_passant == Some(to)
                && sq(f + df, r).and_then(|s| pos.piece_at(s))
                    == Some(Piece {
                        color: c.other(),
                        kind: PieceKind::Pawn,
                    }) =>
            {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_slides(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castles(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    // Can't castle out of check; the passed squares are checked below.
    if pos.in_check(c) {
        return;
    }
    let rights = [pos.castling.wk, pos.castling.wq, pos.castling.bk, pos.castling.bq];
    let enemy = c.other();
    for (rule, allowed) in CASTLES.iter().zip(rights) {
        if !allowed || rule.color != c || rule.king_from != from {
            continue;
        }
        if rule.empty.iter().any(|&s| pos.piece_at(s).is_some()) {
            continue;
        }
        if rule.safe.iter().any(|&s| pos.is_square_attacked(s, enemy)) {
            continue;
        }
        let mut mv = Move::new(rule.king_from, rule.king_to);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
