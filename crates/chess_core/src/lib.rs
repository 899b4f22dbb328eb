//! Chess rules for the search engine.
//!
//! Provides the position representation, legal move generation with
//! apply/undo, termination detection, and FEN / UCI notation. The search
//! crate treats everything here as an external collaborator.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod uci;
pub mod zobrist;

pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::{divide, perft};
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;
