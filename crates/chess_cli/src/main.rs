use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_cli::{CliConfig, play_game, run_uci};
use chess_core::Game;
use clap::{Parser, Subcommand};
use minimax_engine::MinimaxEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chess-ai", about = "Minimax chess engine with alpha-beta pruning", version)]
struct Cli {
    /// TOML settings file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Search depth in plies, overrides the config file
    #[arg(long, value_name = "N", global = true)]
    depth: Option<u8>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game against the engine in the terminal (default)
    Play {
        /// Start from this position instead of the initial one
        #[arg(long, value_name = "FEN")]
        fen: Option<String>,
        /// Take the white pieces without being asked
        #[arg(long, conflicts_with = "black")]
        white: bool,
        /// Take the black pieces without being asked
        #[arg(long)]
        black: bool,
    },
    /// Speak UCI on stdin/stdout
    Uci,
}

fn init_logging(default_level: &str) {
    // RUST_LOG wins over the configured level; stdout is reserved for the game.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let human_plays_white = match &cli.command {
        Some(Commands::Play { white: true, .. }) => Some(true),
        Some(Commands::Play { black: true, .. }) => Some(false),
        _ => None,
    };
    let config = CliConfig::load(cli.config.as_deref())?
        .with_overrides(cli.depth, human_plays_white)?;
    init_logging(&config.log_level);
    info!(?config, "starting");

    let mut engine = MinimaxEngine::new(config.depth);
    match cli.command.unwrap_or(Commands::Play {
        fen: None,
        white: false,
        black: false,
    }) {
        Commands::Play { fen, .. } => {
            let mut game = match fen {
                Some(fen) => Game::from_fen(&fen).with_context(|| format!("bad FEN {fen:?}"))?,
                None => Game::startpos(),
            };
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            play_game(
                &mut input,
                &mut output,
                &mut game,
                &mut engine,
                config.human_plays_white,
            )?;
        }
        Commands::Uci => {
            let stdin = io::stdin();
            run_uci(stdin.lock(), &mut io::stdout(), &mut engine)?;
        }
    }
    Ok(())
}
