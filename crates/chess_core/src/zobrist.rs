//! Zobrist keys for repetition detection.
//!
//! Keys are generated at compile time from a fixed SplitMix64 stream, so a
//! given position hashes identically across runs and builds.

use crate::types::Piece;

const PIECE_KEYS: usize = 2 * 6 * 64;

/// Pre-computed random values, one per hashed feature.
pub struct ZobristKeys {
    /// Indexed by `(color * 6 + kind) * 64 + square`.
    pieces: [u64; PIECE_KEYS],
    /// XOR-ed in when Black is to move.
    pub side_to_move: u64,
    /// Castling rights in `[wk, wq, bk, bq]` order.
    castling: [u64; 4],
    /// En passant file.
    en_passant: [u64; 8],
}

const fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl ZobristKeys {
    pub const fn new() -> Self {
        let mut state = 0x0BAD_5EED_C0FF_EE00u64;

        let mut pieces = [0u64; PIECE_KEYS];
        let mut i = 0;
        while i < PIECE_KEYS {
            pieces[i] = splitmix64(&mut state);
            i += 1;
        }

        let side_to_move = splitmix64(&mut state);

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            castling[i] = splitmix64(&mut state);
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            en_passant[i] = splitmix64(&mut state);
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[(piece.color.idx() * 6 + piece.kind.idx()) * 64 + sq as usize]
    }

    /// Castling right index: 0=wk, 1=wq, 2=bk, 3=bq.
    #[inline(always)]
    pub fn castling_key(&self, index: usize) -> u64 {
        self.castling[index]
    }

    #[inline(always)]
    pub fn ep_key(&self, file: u8) -> u64 {
        self.en_passant[file as usize]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
