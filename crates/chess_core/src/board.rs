use std::fmt;

use crate::error::FenError;
use crate::movegen::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS};
use crate::types::*;
use crate::zobrist::ZOBRIST;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    fn from_fen(field: &str) -> Result<Self, FenError> {
        let mut rights = Self::NONE;
        if field == "-" {
            return Ok(rights);
        }
        for ch in field.chars() {
            let flag = match ch {
                'K' => &mut rights.wk,
                'Q' => &mut rights.wq,
                'k' => &mut rights.bk,
                'q' => &mut rights.bq,
                _ => return Err(FenError::InvalidCastling(ch)),
            };
            *flag = true;
        }
        Ok(rights)
    }

    /// Drops the rights tied to a king or rook home square.
    fn revoke_touching(&mut self, sq: u8) {
        match sq {
            0 => self.wq = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            7 => self.wk = false,
            56 => self.bq = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            63 => self.bk = false,
            _ => {}
        }
    }
}

/// Mailbox board plus the state needed to generate and reverse moves.
/// Square indices run a1=0 .. h8=63.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Everything `make_move` overwrites, returned so `unmake_move` can put it back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    pub fn startpos() -> Self {
        let mut board = [None; 64];
        for (f, kind) in BACK_RANK.into_iter().enumerate() {
            for (color, back, pawns) in [(Color::White, 0, 8), (Color::Black, 56, 48)] {
                board[back + f] = Some(Piece { color, kind });
                board[pawns + f] = Some(Piece {
                    color,
                    kind: PieceKind::Pawn,
                });
            }
        }
        Position {
            board,
            side_to_move: Color::White,
            castling: CastlingRights {
                wk: true,
                wq: true,
                bk: true,
                bq: true,
            },
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Parses a position from Forsyth-Edwards Notation.
    ///
    /// The halfmove clock and fullmove number are optional and default to
    /// `0` and `1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, side, castling, ep, counters @ ..] = fields.as_slice() else {
            return Err(FenError::MissingFields(fields.len()));
        };

        let side_to_move = match *side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };
        let en_passant = match *ep {
            "-" => None,
            // The square passed over by the pawn that just moved two.
            coord => match coord_to_sq(coord) {
                Some(ep_sq) if rank_of(ep_sq) == ep_rank(side_to_move) => Some(ep_sq),
                _ => return Err(FenError::InvalidEnPassant(coord.to_string())),
            },
        };
        let counter = |idx: usize, default: u32| match counters.get(idx) {
            None => Ok(default),
            Some(txt) => txt
                .parse::<u32>()
                .map_err(|_| FenError::InvalidCounter(txt.to_string())),
        };

        let pos = Position {
            board: parse_placement(placement)?,
            side_to_move,
            castling: CastlingRights::from_fen(castling)?,
            en_passant,
            halfmove_clock: counter(0, 0)?,
            fullmove_number: counter(1, 1)?,
        };
        for color in Color::ALL {
            if pos.piece_count(PieceKind::King, color) != 1 {
                return Err(FenError::KingCount);
            }
        }
        Ok(pos)
    }

    /// Renders the position back to FEN.
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                let s = (rank as u8) * 8 + file as u8;
                match self.piece_at(s) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        out.push(' ');
        let c = &self.castling;
        if !(c.wk || c.wq || c.bk || c.bq) {
            out.push('-');
        } else {
            for (flag, ch) in [(c.wk, 'K'), (c.wq, 'Q'), (c.bk, 'k'), (c.bq, 'q')] {
                if flag {
                    out.push(ch);
                }
            }
        }
        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }
        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    /// Number of pieces of `kind` owned by `color`.
    pub fn piece_count(&self, kind: PieceKind, color: Color) -> u32 {
        self.board
            .iter()
            .flatten()
            .filter(|pc| pc.kind == kind && pc.color == color)
            .count() as u32
    }

    /// Zobrist key over placement, side to move, castling rights and the
    /// en passant square. Move clocks are not part of the key, so two
    /// positions that repeat on the board hash equal.
    pub fn position_hash(&self) -> u64 {
        let mut h = 0u64;
        for (i, pc) in self.board.iter().enumerate() {
            if let Some(pc) = pc {
                h ^= ZOBRIST.piece_key(*pc, i as u8);
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        let c = &self.castling;
        for (i, flag) in [c.wk, c.wq, c.bk, c.bq].into_iter().enumerate() {
            if flag {
                h ^= ZOBRIST.castling_key(i);
            }
        }
        if let Some(ep) = self.en_passant {
            h ^= ZOBRIST.ep_key(file_of(ep) as u8);
        }
        h
    }

    /// Claimable fifty-move draw (100 halfmoves without capture or pawn move).
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.board[i]
                && pc.color == c
                && pc.kind == PieceKind::King
            {
                return Some(i as u8);
            }
        }
        None
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn in_check(&self, c: Color) -> bool {
        let ksq = match self.king_sq(c) {
            Some(s) => s,
            None => return false,
        };
        self.is_square_attacked(ksq, c.other())
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);
        let holds = |s: Option<u8>, kinds: &[PieceKind]| {
            s.and_then(|s| self.piece_at(s))
                .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
        };

        // An attacking pawn sits one rank behind the target from its own side.
        let pawn_rank = match by {
            Color::White => tr - 1,
            Color::Black => tr + 1,
        };
        if [-1, 1]
            .iter()
            .any(|df| holds(sq(tf + df, pawn_rank), &[PieceKind::Pawn]))
        {
            return true;
        }
        if KNIGHT_DELTAS
            .iter()
            .any(|(df, dr)| holds(sq(tf + df, tr + dr), &[PieceKind::Knight]))
        {
            return true;
        }
        if KING_DELTAS
            .iter()
            .any(|(df, dr)| holds(sq(tf + df, tr + dr), &[PieceKind::King]))
        {
            return true;
        }

        let rays: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
            (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, sliders) in rays {
            for (df, dr) in dirs {
                let mut f = tf + df;
                let mut r = tr + dr;
                while let Some(s) = sq(f, r) {
                    if self.piece_at(s).is_some() {
                        if holds(Some(s), &sliders) {
                            return true;
                        }
                        break;
                    }
                    f += df;
                    r += dr;
                }
            }
        }

        false
    }

    /// Plays `mv` without checking legality. The returned `Undo` takes it
    /// back through `unmake_move`.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let Move {
            from,
            to,
            promo,
            is_en_passant,
            is_castle,
        } = mv;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let undo_castling = self.castling.clone();
        let undo_ep = self.en_passant;
        let undo_clocks = (self.halfmove_clock, self.fullmove_number);

        // The pawn taken en passant stands beside the mover, behind `to`.
        let ep_captured_sq = is_en_passant.then(|| match moved.color {
            Color::White => to - 8,
            Color::Black => to + 8,
        });
        let captured = match ep_captured_sq {
            Some(cs) => self.board[cs as usize].take(),
            None => self.piece_at(to),
        };

        let is_pawn = moved.kind == PieceKind::Pawn;
        let placed = if is_pawn && matches!(rank_of(to), 0 | 7) {
            Piece {
                color: moved.color,
                kind: promo.unwrap_or(PieceKind::Queen),
            }
        } else {
            moved
        };
        self.set_piece(from, None);
        self.set_piece(to, Some(placed));

        let rook_move = if is_castle && moved.kind == PieceKind::King {
            castle_rook_squares(from, to)
        } else {
            None
        };
        if let Some((rook_from, rook_to)) = rook_move {
            let rook = self.board[rook_from as usize].take();
            self.set_piece(rook_to, rook);
        }

        self.castling.revoke_touching(from);
        self.castling.revoke_touching(to);
        self.en_passant = (is_pawn && from.abs_diff(to) == 16).then_some((from + to) / 2);
        self.halfmove_clock = if is_pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: undo_castling,
            en_passant: undo_ep,
            halfmove_clock: undo_clocks.0,
            fullmove_number: undo_clocks.1,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    /// Reverses `make_move(mv)`. `undo` must be the value that call returned.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        let Undo {
            captured,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            moved_piece,
            rook_move,
            ep_captured_sq,
        } = undo;

        self.side_to_move = self.side_to_move.other();
        self.castling = castling;
        self.en_passant = en_passant;
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;

        if let Some((rook_from, rook_to)) = rook_move {
            let rook = self.board[rook_to as usize].take();
            self.set_piece(rook_from, rook);
        }

        // Putting the pawn back as it was also reverts a promotion.
        self.set_piece(mv.from, Some(moved_piece));
        match ep_captured_sq {
            Some(cs) => {
                self.set_piece(mv.to, None);
                self.set_piece(cs, captured);
            }
            None => self.set_piece(mv.to, captured),
        }
    }
}

/// Rook (from, to) squares for a castling king move, if `from -> to` is one.
fn castle_rook_squares(from: u8, to: u8) -> Option<(u8, u8)> {
    match (from, to) {
        (4, 6) => Some((7, 5)),
        (4, 2) => Some((0, 3)),
        (60, 62) => Some((63, 61)),
        (60, 58) => Some((56, 59)),
        _ => None,
    }
}

/// Rank of a valid en passant square when `side` is to move.
fn ep_rank(side: Color) -> i8 {
    match side {
        Color::White => 5,
        Color::Black => 2,
    }
}

/// Piece placement field of a FEN, rank 8 first.
fn parse_placement(field: &str) -> Result<[Option<Piece>; 64], FenError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RankCount(rows.len()));
    }

    let mut board = [None; 64];
    for (row, text) in rows.iter().enumerate() {
        let rank = 7 - row as u8;
        let width_err = || FenError::RankWidth { rank: rank as usize + 1 };
        let mut file = 0u8;
        for ch in text.chars() {
            match ch.to_digit(10) {
                Some(skip @ 1..=8) => file += skip as u8,
                Some(_) => return Err(width_err()),
                None => {
                    let kind = PieceKind::from_symbol(ch).ok_or(FenError::InvalidPiece(ch))?;
                    if file >= 8 {
                        return Err(width_err());
                    }
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    board[(rank * 8 + file) as usize] = Some(Piece { color, kind });
                    file += 1;
                }
            }
            if file > 8 {
                return Err(width_err());
            }
        }
        if file != 8 {
            return Err(width_err());
        }
    }
    Ok(board)
}

/// ASCII diagram, rank 8 at the top, `.` for empty squares.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            let row: Vec<String> = (0..8u8)
                .map(|file| match self.piece_at(rank * 8 + file) {
                    Some(pc) => pc.symbol().to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
