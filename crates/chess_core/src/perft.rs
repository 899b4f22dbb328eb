//! Move-path enumeration for validating move generation.

use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Counts the leaf nodes of the legal move tree `depth` plies deep.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    let mut buffers = vec![Vec::with_capacity(64); depth as usize];
    count(pos, &mut buffers)
}

/// Per-root-move leaf counts, in generation order.
pub fn divide(pos: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    let mut root = Vec::with_capacity(64);
    legal_moves_into(pos, &mut root);
    let mut buffers = vec![Vec::with_capacity(64); depth.saturating_sub(1) as usize];
    root.into_iter()
        .map(|mv| {
            let undo = pos.make_move(mv);
            let nodes = count(pos, &mut buffers);
            pos.unmake_move(mv, undo);
            (mv, nodes)
        })
        .collect()
}

fn count(pos: &mut Position, buffers: &mut [Vec<Move>]) -> u64 {
    let Some((buf, rest)) = buffers.split_first_mut() else {
        return 1;
    };
    legal_moves_into(pos, buf);
    if rest.is_empty() {
        return buf.len() as u64;
    }
    let mut nodes = 0;
    for &mv in buf.iter() {
        let undo = pos.make_move(mv);
        nodes += count(pos, rest);
        pos.unmake_move(mv, undo);
    }
    nodes
}
