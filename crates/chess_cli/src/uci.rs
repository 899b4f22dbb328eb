//! Minimal UCI front end: fixed-depth search only, time controls are ignored.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chess_core::{Game, move_to_uci, set_position_from_uci};
use minimax_engine::{MinimaxEngine, SearchError, WIN_SCORE};
use tracing::{debug, warn};

use crate::config::MAX_DEPTH;

/// Reads UCI commands from `input` until `quit` or end of input.
pub fn run_uci<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    engine: &mut MinimaxEngine,
) -> Result<()> {
    let mut game = Game::startpos();

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            continue;
        };
        debug!(command, "uci command");

        match command {
            "uci" => {
                writeln!(output, "id name {}", engine.name())?;
                writeln!(output, "id author {}", engine.author())?;
                writeln!(
                    output,
                    "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
                    engine.depth()
                )?;
                writeln!(output, "uciok")?;
            }
            "isready" => writeln!(output, "readyok")?,
            "setoption" => {
                if let Some(depth) = parse_depth_option(args) {
                    engine.set_depth(depth);
                }
            }
            "ucinewgame" => {
                game = Game::startpos();
                engine.new_game();
            }
            "position" => match set_position_from_uci(args) {
                Ok(new_game) => game = new_game,
                Err(err) => warn!(%err, "ignoring position command"),
            },
            "go" => match engine.search(&mut game) {
                Ok(report) => {
                    writeln!(
                        output,
                        "info depth {} score {} nodes {}",
                        report.depth,
                        uci_score(report.score, report.depth),
                        report.stats.nodes
                    )?;
                    writeln!(output, "bestmove {}", move_to_uci(report.best_move))?;
                }
                Err(SearchError::GameOver | SearchError::NoLegalMoves) => {
                    writeln!(output, "bestmove 0000")?;
                }
                Err(err) => return Err(err.into()),
            },
            "quit" => break,
            _ => debug!(command, "unknown command"),
        }
        output.flush()?;
    }
    Ok(())
}

/// Score field of an `info` line, from White's side.
///
/// Material is sent as centipawns. A mate score carries no distance, so the
/// mate is reported at the furthest full move the search horizon allows.
fn uci_score(score: i32, depth: u8) -> String {
    let horizon = (i32::from(depth) + 1) / 2;
    match score {
        WIN_SCORE => format!("mate {horizon}"),
        s if s == -WIN_SCORE => format!("mate -{horizon}"),
        s => format!("cp {}", s * 100),
    }
}

/// `name Depth value N`, clamped to the supported range.
fn parse_depth_option(args: &[&str]) -> Option<u8> {
    let name_at = args.iter().position(|&a| a == "name")?;
    if !args.get(name_at + 1)?.eq_ignore_ascii_case("depth") {
        return None;
    }
    let value_at = args.iter().position(|&a| a == "value")?;
    let depth = args.get(value_at + 1)?.parse::<u8>().ok()?;
    Some(depth.clamp(1, MAX_DEPTH))
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
