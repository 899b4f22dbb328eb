//! Terminal front ends for the minimax engine.

pub mod config;
pub mod play;
pub mod uci;

pub use config::CliConfig;
pub use play::play_game;
pub use uci::run_uci;
