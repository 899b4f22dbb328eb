//! Fixed-depth search benchmark for profiling with cargo-flamegraph.
//!
//! Runs the root search on a handful of positions and reports nodes,
//! cutoffs and throughput per position.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p minimax_engine -- [depth]

use chess_core::Game;
use minimax_engine::{Searcher, describe_score};
use std::time::Instant;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Italian",
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    ("Hanging queen", "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1"),
];

const DEFAULT_DEPTH: u8 = 4;

fn main() {
    let depth = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u8>().ok())
        .unwrap_or(DEFAULT_DEPTH);

    println!("=== Minimax Search Benchmark ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let mut game = match Game::from_fen(fen) {
            Ok(game) => game,
            Err(err) => {
                println!("{name:.<20} bad FEN: {err}");
                continue;
            }
        };

        print!("{name:.<20}");

        let mut searcher = Searcher::new();
        let start = Instant::now();
        let best = searcher.find_best_move(&mut game, depth);
        let elapsed = start.elapsed();

        let stats = searcher.stats();
        total_nodes += stats.nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            stats.nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        match best {
            Ok(best) => println!(
                " {:<6} {:>12} {:>9} nodes {:>8} cutoffs {nps:>10.0} nps ({elapsed:>8.3?})",
                best.mv.to_string(),
                describe_score(best.score),
                stats.nodes,
                stats.cutoffs,
            ),
            Err(err) => println!(" error: {err}"),
        }
    }

    println!();
    println!("{:=<70}", "");
    let avg_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({avg_nps:.0} nodes/sec)");
}
