//! The contract every piece variant satisfies.
//!
//! A piece answers two questions: where can it go on the current board
//! (`possible_moves`), and what bookkeeping happens when it goes there
//! (`move_to`). The board owns tile occupancy; a piece only owns its own
//! location, its `unmoved` flag and whatever variant state it needs.

use std::fmt;

use crate::game_state::chess_types::{BoardLocation, PieceClass, PieceId, Team};
use crate::game_state::tile_board::TileBoard;
use crate::pieces::pawn::Pawn;

/// State shared by every piece variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCore {
    pub id: PieceId,
    pub team: Team,
    /// Back-reference to the tile this piece stands on.
    pub location: BoardLocation,
    /// True until the first committed move.
    pub unmoved: bool,
}

impl PieceCore {
    pub fn new(id: PieceId, team: Team, location: BoardLocation) -> Self {
        Self {
            id,
            team,
            location,
            unmoved: true,
        }
    }

    /// Base half of a move commit.
    #[inline]
    pub fn relocate(&mut self, to: BoardLocation) {
        self.location = to;
        self.unmoved = false;
    }
}

pub trait ChessPiece: fmt::Debug {
    fn core(&self) -> &PieceCore;
    fn core_mut(&mut self) -> &mut PieceCore;
    fn class(&self) -> PieceClass;

    /// Destinations reachable on `board` as it stands. Never mutates the board
    /// or any other piece. Order is unspecified; there are no duplicates.
    fn possible_moves(&self, board: &TileBoard) -> Vec<BoardLocation>;

    /// Commit a move to `to`. The caller guarantees `to` came from the last
    /// `possible_moves` query on the same board state.
    fn move_to(&mut self, to: BoardLocation) {
        self.core_mut().relocate(to);
    }

    /// Whether `location` is a valid landing tile: it exists and is either
    /// empty or holds a capturable piece.
    fn is_possible_move(&self, board: &TileBoard, location: BoardLocation) -> bool {
        self.is_empty(board, location) || self.is_possible_capture(board, location)
    }

    /// Close any one-move window this piece opened. Only pawns have one.
    fn expire_en_passant(&mut self) {}

    fn as_pawn(&self) -> Option<&Pawn> {
        None
    }

    fn as_pawn_mut(&mut self) -> Option<&mut Pawn> {
        None
    }

    #[inline]
    fn id(&self) -> PieceId {
        self.core().id
    }

    #[inline]
    fn team(&self) -> Team {
        self.core().team
    }

    #[inline]
    fn location(&self) -> BoardLocation {
        self.core().location
    }

    #[inline]
    fn unmoved(&self) -> bool {
        self.core().unmoved
    }

    /// Tile exists and has no occupant.
    fn is_empty(&self, board: &TileBoard, location: BoardLocation) -> bool {
        board.tile(location).is_some_and(|tile| tile.is_empty())
    }

    /// Tile holds a piece of the opposing team.
    fn contains_different_team_piece(&self, board: &TileBoard, location: BoardLocation) -> bool {
        board
            .piece_at(location)
            .is_some_and(|other| other.team() != self.team())
    }

    /// Tile holds an opposing piece other than a King. Kings are never
    /// captured at this layer; check and mate belong to the caller.
    fn is_possible_capture(&self, board: &TileBoard, location: BoardLocation) -> bool {
        match board.piece_at(location) {
            Some(other) => {
                other.id() != self.id()
                    && self.contains_different_team_piece(board, location)
                    && other.class() != PieceClass::King
            }
            None => false,
        }
    }
}

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each direction until the edge or the first occupied tile. The blocking
/// tile is included only when it is a possible capture.
pub fn ray_moves<P: ChessPiece + ?Sized>(
    piece: &P,
    board: &TileBoard,
    directions: &[(i8, i8)],
) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    for &(d_file, d_rank) in directions {
        let mut cursor = piece.location().offset(d_file, d_rank);
        while board.tile(cursor).is_some() {
            if piece.is_empty(board, cursor) {
                out.push(cursor);
                cursor = cursor.offset(d_file, d_rank);
                continue;
            }
            if piece.is_possible_capture(board, cursor) {
                out.push(cursor);
            }
            break;
        }
    }
    out
}

/// Single hops by each offset, kept when the landing tile is possible.
pub fn step_moves<P: ChessPiece + ?Sized>(
    piece: &P,
    board: &TileBoard,
    offsets: &[(i8, i8)],
) -> Vec<BoardLocation> {
    offsets
        .iter()
        .map(|&(d_file, d_rank)| piece.location().offset(d_file, d_rank))
        .filter(|&to| piece.is_possible_move(board, to))
        .collect()
}

/// Build the boxed variant for `class`.
pub fn new_piece(class: PieceClass, core: PieceCore) -> Box<dyn ChessPiece> {
    use crate::pieces::{bishop::Bishop, king::King, knight::Knight, queen::Queen, rook::Rook};

    match class {
        PieceClass::Pawn => Box::new(Pawn::new(core)),
        PieceClass::Knight => Box::new(Knight::new(core)),
        PieceClass::Bishop => Box::new(Bishop::new(core)),
        PieceClass::Rook => Box::new(Rook::new(core)),
        PieceClass::Queen => Box::new(Queen::new(core)),
        PieceClass::King => Box::new(King::new(core)),
    }
}
