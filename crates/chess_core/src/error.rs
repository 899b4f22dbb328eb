//! Error types for parsing positions and moves.

use thiserror::Error;

/// Reasons a FEN string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks in board section, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
    #[error("each side needs exactly one king")]
    KingCount,
}

/// Reasons a UCI move string can be rejected against a position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("malformed move '{0}': expected UCI notation such as e2e4")]
    Malformed(String),
    #[error("illegal move '{0}' in this position")]
    Illegal(String),
}

/// Errors from a UCI `position` command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionCommandError {
    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),
    #[error(transparent)]
    Move(#[from] MoveParseError),
    #[error("expected 'startpos' or 'fen', found '{0}'")]
    UnknownSetup(String),
}
