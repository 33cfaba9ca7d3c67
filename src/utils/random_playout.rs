//! Random playouts over a `TileBoard`.
//!
//! Teams alternate; each ply picks a random piece of the side to move among
//! those with at least one destination, then a random destination, and
//! commits it through `try_move`. There is no check detection, so a playout
//! only ends early when the side to move has no destinations at all.
//! Used by property tests (with a seeded `StdRng`), benchmarks and the demo
//! binary.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{BoardLocation, PieceId, Team};
use crate::game_state::move_journal::MoveRecord;
use crate::game_state::tile_board::TileBoard;

/// Every piece of `team` that can move, with its destinations.
pub fn movable_pieces(board: &TileBoard, team: Team) -> ChessResult<Vec<(PieceId, Vec<BoardLocation>)>> {
    let mut out = Vec::new();
    for id in board.pieces_of(team) {
        let moves = board.possible_moves(id)?;
        if !moves.is_empty() {
            out.push((id, moves));
        }
    }
    Ok(out)
}

/// Play one random move for `team`. `Ok(None)` when it has nothing to play.
pub fn play_random_move<R: Rng + ?Sized>(
    board: &mut TileBoard,
    team: Team,
    rng: &mut R,
) -> ChessResult<Option<MoveRecord>> {
    let candidates = movable_pieces(board, team)?;
    let Some((id, moves)) = candidates.choose(rng) else {
        return Ok(None);
    };
    let Some(&to) = moves.choose(rng) else {
        return Ok(None);
    };
    board.try_move(*id, to).map(Some)
}

/// Play up to `plies` random half-moves starting with `first`.
pub fn play_random_game<R: Rng + ?Sized>(
    board: &mut TileBoard,
    first: Team,
    plies: usize,
    rng: &mut R,
) -> ChessResult<Vec<MoveRecord>> {
    let mut records = Vec::with_capacity(plies);
    let mut side = first;
    for _ in 0..plies {
        match play_random_move(board, side, rng)? {
            Some(record) => records.push(record),
            None => break,
        }
        side = side.opposite();
    }
    Ok(records)
}
