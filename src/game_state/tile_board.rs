//! Tile grid and piece arena.
//!
//! `TileBoard` is the board collaborator the piece rules run against. It owns
//! a fixed rectangle of tiles and every live piece, and it performs the board
//! half of a move commit: occupancy updates, ordinary captures, expiring
//! en-passant windows, and removing pieces signalled through the pawns'
//! capture callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{
    DEFAULT_FILES, DEFAULT_RANKS, MAX_BOARD_DIMENSION, STARTING_LAYOUT,
};
use crate::game_state::chess_types::{BoardLocation, PieceClass, PieceId, Team};
use crate::game_state::move_journal::{MoveJournal, MoveRecord};
use crate::pieces::pawn::Pawn;
use crate::pieces::piece::{new_piece, ChessPiece, PieceCore};
use crate::utils::layout_parser::parse_layout;

/// One cell of the grid. Its location never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    location: BoardLocation,
    occupant: Option<PieceId>,
}

impl Tile {
    #[inline]
    pub fn location(&self) -> BoardLocation {
        self.location
    }

    #[inline]
    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

#[derive(Debug)]
pub struct TileBoard {
    files: i8,
    ranks: i8,
    // Row-major by rank.
    tiles: Vec<Tile>,
    // Indexed by `PieceId`; captured pieces leave `None` behind so ids stay
    // stable.
    pieces: Vec<Option<Box<dyn ChessPiece>>>,
    // Filled by pawn capture callbacks during `move_to`, drained right after.
    pending_captures: Rc<RefCell<Vec<PieceId>>>,
    journal: MoveJournal,
}

impl TileBoard {
    pub fn new(files: i8, ranks: i8) -> ChessResult<Self> {
        let valid = 1..=MAX_BOARD_DIMENSION;
        if !valid.contains(&files) || !valid.contains(&ranks) {
            return Err(ChessErrors::InvalidBoardDimensions((
                i16::from(files),
                i16::from(ranks),
            )));
        }

        let tiles = (0..ranks)
            .flat_map(|rank| {
                (0..files).map(move |file| Tile {
                    location: BoardLocation::new(file, rank),
                    occupant: None,
                })
            })
            .collect();

        Ok(Self {
            files,
            ranks,
            tiles,
            pieces: Vec::new(),
            pending_captures: Rc::new(RefCell::new(Vec::new())),
            journal: MoveJournal::new(),
        })
    }

    /// Empty 8x8 board.
    pub fn standard() -> Self {
        Self::new(DEFAULT_FILES, DEFAULT_RANKS).expect("default dimensions are valid")
    }

    pub fn starting_position() -> Self {
        Self::from_layout(STARTING_LAYOUT).expect("starting layout should always parse")
    }

    /// Build a board from layout notation. See `utils::layout_parser`.
    pub fn from_layout(layout: &str) -> ChessResult<Self> {
        let parsed = parse_layout(layout)?;
        let mut board = Self::new(parsed.files, parsed.ranks)?;
        for placement in parsed.placements {
            board.place_piece(placement.class, placement.team, placement.location)?;
        }
        Ok(board)
    }

    #[inline]
    pub fn files(&self) -> i8 {
        self.files
    }

    #[inline]
    pub fn ranks(&self) -> i8 {
        self.ranks
    }

    #[inline]
    pub fn contains(&self, location: BoardLocation) -> bool {
        (0..self.files).contains(&location.file) && (0..self.ranks).contains(&location.rank)
    }

    fn tile_index(&self, location: BoardLocation) -> Option<usize> {
        self.contains(location)
            .then(|| location.rank as usize * self.files as usize + location.file as usize)
    }

    /// Grid lookup; `None` for anything off the board.
    #[inline]
    pub fn tile(&self, location: BoardLocation) -> Option<&Tile> {
        self.tile_index(location).map(|index| &self.tiles[index])
    }

    #[inline]
    pub fn tile_at(&self, file: i8, rank: i8) -> Option<&Tile> {
        self.tile(BoardLocation::new(file, rank))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn piece(&self, id: PieceId) -> Option<&dyn ChessPiece> {
        self.pieces.get(id.0)?.as_deref()
    }

    fn piece_mut(&mut self, id: PieceId) -> Option<&mut (dyn ChessPiece + 'static)> {
        self.pieces.get_mut(id.0)?.as_deref_mut()
    }

    pub fn piece_at(&self, location: BoardLocation) -> Option<&dyn ChessPiece> {
        self.piece(self.tile(location)?.occupant?)
    }

    pub fn pawn(&self, id: PieceId) -> Option<&Pawn> {
        self.piece(id)?.as_pawn()
    }

    pub fn pawn_mut(&mut self, id: PieceId) -> Option<&mut Pawn> {
        self.piece_mut(id)?.as_pawn_mut()
    }

    /// Ids of every live piece, in placement order.
    pub fn piece_ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| PieceId(index))
    }

    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = PieceId> + '_ {
        self.piece_ids()
            .filter(move |id| self.piece(*id).is_some_and(|piece| piece.team() == team))
    }

    pub fn journal(&self) -> &MoveJournal {
        &self.journal
    }

    /// Put a new, unmoved piece on an empty tile.
    pub fn place_piece(
        &mut self,
        class: PieceClass,
        team: Team,
        location: BoardLocation,
    ) -> ChessResult<PieceId> {
        let index = self
            .tile_index(location)
            .ok_or(ChessErrors::OffBoard(location))?;
        if let Some(occupant) = self.tiles[index].occupant {
            return Err(ChessErrors::TileOccupied((location, occupant)));
        }

        let id = PieceId(self.pieces.len());
        let mut piece = new_piece(class, PieceCore::new(id, team, location));
        if let Some(pawn) = piece.as_pawn_mut() {
            let sink = Rc::clone(&self.pending_captures);
            pawn.set_on_en_passant_capture(Box::new(move |victim| {
                sink.borrow_mut().push(victim);
            }));
        }

        self.pieces.push(Some(piece));
        self.tiles[index].occupant = Some(id);
        Ok(id)
    }

    /// Take a piece out of play and free its tile.
    pub fn remove_piece(&mut self, id: PieceId) -> ChessResult<Box<dyn ChessPiece>> {
        let piece = self
            .pieces
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(ChessErrors::UnknownPiece(id))?;

        if let Some(index) = self.tile_index(piece.location()) {
            if self.tiles[index].occupant == Some(id) {
                self.tiles[index].occupant = None;
            }
        }
        Ok(piece)
    }

    /// Legal destinations for `id` on the current board. Arms the piece's
    /// trigger cache for the next commit.
    pub fn possible_moves(&self, id: PieceId) -> ChessResult<Vec<BoardLocation>> {
        let piece = self.piece(id).ok_or(ChessErrors::UnknownPiece(id))?;
        Ok(piece.possible_moves(self))
    }

    /// Commit a move without checking it against the legal set. `to` must come
    /// from the latest `possible_moves(id)` on this exact board state;
    /// anything else leaves the en-passant bookkeeping unspecified.
    pub fn move_piece(&mut self, id: PieceId, to: BoardLocation) -> ChessResult<MoveRecord> {
        let (from, team, class) = {
            let piece = self.piece(id).ok_or(ChessErrors::UnknownPiece(id))?;
            (piece.location(), piece.team(), piece.class())
        };
        let to_index = self.tile_index(to).ok_or(ChessErrors::OffBoard(to))?;

        let mut captured = Vec::new();
        if let Some(occupant) = self.tiles[to_index].occupant.filter(|occupant| *occupant != id) {
            self.remove_piece(occupant)?;
            captured.push(occupant);
        }

        if let Some(from_index) = self.tile_index(from) {
            self.tiles[from_index].occupant = None;
        }
        self.tiles[to_index].occupant = Some(id);

        self.piece_mut(id)
            .ok_or(ChessErrors::UnknownPiece(id))?
            .move_to(to);

        // A window lasts one half-move; only the mover may have just opened one.
        for piece in self.pieces.iter_mut().flatten() {
            if piece.id() != id {
                piece.expire_en_passant();
            }
        }

        let signalled: Vec<PieceId> = self.pending_captures.borrow_mut().drain(..).collect();
        let en_passant = !signalled.is_empty();
        for victim in signalled {
            self.remove_piece(victim)?;
            captured.push(victim);
        }

        let record = MoveRecord {
            ply: self.journal.len(),
            piece: id,
            class,
            team,
            from,
            to,
            captured,
            en_passant,
            committed_at: Utc::now(),
        };
        self.journal.push(record.clone());
        Ok(record)
    }

    /// Re-run the query for `id` and commit only if `to` is in the result.
    pub fn try_move(&mut self, id: PieceId, to: BoardLocation) -> ChessResult<MoveRecord> {
        if !self.possible_moves(id)?.contains(&to) {
            return Err(ChessErrors::IllegalMove((id, to)));
        }
        self.move_piece(id, to)
    }
}
