//! Rook: orthogonal rays.

use crate::game_state::chess_types::{BoardLocation, PieceClass};
use crate::game_state::tile_board::TileBoard;
use crate::pieces::piece::{ray_moves, ChessPiece, PieceCore, ORTHOGONAL_DIRECTIONS};

#[derive(Debug)]
pub struct Rook {
    core: PieceCore,
}

impl Rook {
    pub fn new(core: PieceCore) -> Self {
        Self { core }
    }
}

impl ChessPiece for Rook {
    fn core(&self) -> &PieceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PieceCore {
        &mut self.core
    }

    fn class(&self) -> PieceClass {
        PieceClass::Rook
    }

    fn possible_moves(&self, board: &TileBoard) -> Vec<BoardLocation> {
        ray_moves(self, board, &ORTHOGONAL_DIRECTIONS)
    }
}
