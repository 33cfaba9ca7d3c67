//! Queen: rook and bishop rays combined.

use crate::game_state::chess_types::{BoardLocation, PieceClass};
use crate::game_state::tile_board::TileBoard;
use crate::pieces::piece::{
    ray_moves, ChessPiece, PieceCore, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

#[derive(Debug)]
pub struct Queen {
    core: PieceCore,
}

impl Queen {
    pub fn new(core: PieceCore) -> Self {
        Self { core }
    }
}

impl ChessPiece for Queen {
    fn core(&self) -> &PieceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PieceCore {
        &mut self.core
    }

    fn class(&self) -> PieceClass {
        PieceClass::Queen
    }

    fn possible_moves(&self, board: &TileBoard) -> Vec<BoardLocation> {
        let mut out = ray_moves(self, board, &ORTHOGONAL_DIRECTIONS);
        out.extend(ray_moves(self, board, &DIAGONAL_DIRECTIONS));
        out
    }
}
