use crate::{
    board::Position,
    error::{MoveParseError, PositionCommandError},
    game::Game,
    movegen::legal_moves,
    types::*,
};

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Parses `txt` as a UCI move and resolves it against the legal moves of
/// `pos`, so castling and en passant flags come out right.
///
/// A promotion must name its piece: `e7e8` does not match `e7e8q`.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, MoveParseError> {
    let malformed = || MoveParseError::Malformed(txt.to_string());
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(malformed());
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(malformed)?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(malformed)?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_symbol(ch) {
            Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
                Some(kind)
            }
            _ => return Err(malformed()),
        },
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
        .ok_or_else(|| MoveParseError::Illegal(txt.to_string()))
}

/// Builds a game from the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
pub fn set_position_from_uci(args: &[&str]) -> Result<Game, PositionCommandError> {
    let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
    let (setup, moves) = args.split_at(moves_at);

    let mut game = match setup.split_first() {
        None => Game::startpos(),
        Some((&"startpos", _)) => Game::startpos(),
        Some((&"fen", fields)) => Game::from_fen(&fields.join(" "))?,
        Some((other, _)) => return Err(PositionCommandError::UnknownSetup(other.to_string())),
    };

    for txt in moves.iter().skip(1) {
        let mv = parse_uci_move(game.position(), txt)?;
        game.push(mv);
    }
    Ok(game)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
