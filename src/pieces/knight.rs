//! Knight: fixed L-shaped jumps, ignores anything in between.

use crate::game_state::chess_types::{BoardLocation, PieceClass};
use crate::game_state::tile_board::TileBoard;
use crate::pieces::piece::{step_moves, ChessPiece, PieceCore};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[derive(Debug)]
pub struct Knight {
    core: PieceCore,
}

impl Knight {
    pub fn new(core: PieceCore) -> Self {
        Self { core }
    }
}

impl ChessPiece for Knight {
    fn core(&self) -> &PieceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PieceCore {
        &mut self.core
    }

    fn class(&self) -> PieceClass {
        PieceClass::Knight
    }

    fn possible_moves(&self, board: &TileBoard) -> Vec<BoardLocation> {
        step_moves(self, board, &KNIGHT_OFFSETS)
    }
}
