//! Bishop: diagonal rays.

use crate::game_state::chess_types::{BoardLocation, PieceClass};
use crate::game_state::tile_board::TileBoard;
use crate::pieces::piece::{ray_moves, ChessPiece, PieceCore, DIAGONAL_DIRECTIONS};

#[derive(Debug)]
pub struct Bishop {
    core: PieceCore,
}

impl Bishop {
    pub fn new(core: PieceCore) -> Self {
        Self { core }
    }
}

impl ChessPiece for Bishop {
    fn core(&self) -> &PieceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PieceCore {
        &mut self.core
    }

    fn class(&self) -> PieceClass {
        PieceClass::Bishop
    }

    fn possible_moves(&self, board: &TileBoard) -> Vec<BoardLocation> {
        ray_moves(self, board, &DIAGONAL_DIRECTIONS)
    }
}
