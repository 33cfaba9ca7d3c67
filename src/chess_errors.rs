//! Errors used by the board grid and the setup/diagnostic utilities.
//!
//! The rule core never fails: off-board coordinates, empty tiles and friendly
//! occupants are answered with `false` by the piece predicates. `ChessErrors`
//! covers what sits around it: building boards, placing and looking up
//! pieces, parsing coordinates and layouts, and the optional checked commit.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{BoardLocation, PieceId};

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Requested board width or height is outside `1..=MAX_BOARD_DIMENSION`.
    ///
    /// Payload: (files, ranks) as requested.
    InvalidBoardDimensions((i16, i16)),

    /// A location has no tile on this board.
    OffBoard(BoardLocation),

    /// Tried to place a piece on a tile that already has an occupant.
    ///
    /// Payload: the tile and its current occupant.
    TileOccupied((BoardLocation, PieceId)),

    /// No live piece with this id exists on the board.
    UnknownPiece(PieceId),

    /// A checked commit named a destination outside the piece's legal set.
    ///
    /// Payload: (piece, requested destination).
    IllegalMove((PieceId, BoardLocation)),

    /// A coordinate string such as `"d7"` could not be parsed.
    InvalidAlgebraic(String),

    /// A board layout string was malformed; payload describes why.
    InvalidLayout(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidBoardDimensions((files, ranks)) => {
                write!(f, "invalid board dimensions {files}x{ranks}")
            }
            ChessErrors::OffBoard(location) => write!(f, "location {location} is off the board"),
            ChessErrors::TileOccupied((location, occupant)) => {
                write!(f, "tile {location} is already occupied by piece {occupant}")
            }
            ChessErrors::UnknownPiece(id) => write!(f, "no piece {id} on the board"),
            ChessErrors::IllegalMove((id, to)) => {
                write!(f, "piece {id} cannot move to {to}")
            }
            ChessErrors::InvalidAlgebraic(text) => write!(f, "invalid algebraic square: {text}"),
            ChessErrors::InvalidLayout(msg) => write!(f, "invalid board layout: {msg}"),
        }
    }
}

impl Error for ChessErrors {}
