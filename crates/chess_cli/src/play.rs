//! Interactive game between a human at the terminal and the engine.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use chess_core::{Color, Game, MoveParseError, parse_uci_move};
use minimax_engine::MinimaxEngine;
use tracing::debug;

/// Plays `game` to the end, reading human moves from `input` and writing the
/// transcript to `output`. Returns the final result string.
///
/// When `human_plays_white` is `None` the player is asked.
pub fn play_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    game: &mut Game,
    engine: &mut MinimaxEngine,
    human_plays_white: Option<bool>,
) -> Result<&'static str> {
    writeln!(output, "Welcome to Chess AI (Minimax + Alpha-Beta Pruning)")?;
    writeln!(output, "Search depth fixed at {} moves.\n", engine.depth())?;
    writeln!(output, "{game}")?;

    let human_plays_white = match human_plays_white {
        Some(white) => white,
        None => {
            let answer = prompt(
                input,
                output,
                "Do you want to play as White and move first? (y/n): ",
            )?;
            answer.trim().eq_ignore_ascii_case("y")
        }
    };
    let human = if human_plays_white {
        Color::White
    } else {
        Color::Black
    };
    debug!(?human, "starting game");

    while !game.is_game_over() {
        if game.side_to_move() == human {
            let mv = read_human_move(input, output, game)?;
            game.push(mv);
            writeln!(output, "\nBoard after your move:")?;
            writeln!(output, "{game}")?;
        } else {
            let mv = engine.search(game)?.best_move;
            game.push(mv);
            writeln!(output, "\nAI plays: {mv}")?;
            writeln!(output, "{game}")?;
        }
    }

    let result = game.result();
    writeln!(output, "\nGame Over: {result}")?;
    Ok(result)
}

fn read_human_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    game: &Game,
) -> Result<chess_core::Move> {
    loop {
        let text = prompt(input, output, "Your move (UCI format, e.g. e2e4): ")?;
        match parse_uci_move(game.position(), text.trim()) {
            Ok(mv) => return Ok(mv),
            Err(MoveParseError::Malformed(_)) => writeln!(output, "Invalid format. Try again.")?,
            Err(MoveParseError::Illegal(_)) => writeln!(output, "Illegal move. Try again.")?,
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        bail!("input closed before the game finished");
    }
    Ok(line)
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
