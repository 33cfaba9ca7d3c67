//! King: one step in any direction. Castling is not part of this rule set.

use crate::game_state::chess_types::{BoardLocation, PieceClass};
use crate::game_state::tile_board::TileBoard;
use crate::pieces::piece::{
    step_moves, ChessPiece, PieceCore, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

#[derive(Debug)]
pub struct King {
    core: PieceCore,
}

impl King {
    pub fn new(core: PieceCore) -> Self {
        Self { core }
    }
}

impl ChessPiece for King {
    fn core(&self) -> &PieceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PieceCore {
        &mut self.core
    }

    fn class(&self) -> PieceClass {
        PieceClass::King
    }

    fn possible_moves(&self, board: &TileBoard) -> Vec<BoardLocation> {
        let mut out = step_moves(self, board, &ORTHOGONAL_DIRECTIONS);
        out.extend(step_moves(self, board, &DIAGONAL_DIRECTIONS));
        out
    }
}
