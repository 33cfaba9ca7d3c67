//! Core value types shared by the board grid and the piece rules.
//!
//! Teams, piece classes, tile coordinates and piece handles are all small
//! `Copy` values so they can be passed around freely by the move generators.

use std::fmt;

/// Side a piece belongs to.
///
/// White advances toward decreasing rank, Black toward increasing rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank delta of one step "forward" for this team.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => -1,
            Team::Black => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "white"),
            Team::Black => write!(f, "black"),
        }
    }
}

/// Piece kind, independent of team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceClass::Pawn => "pawn",
            PieceClass::Knight => "knight",
            PieceClass::Bishop => "bishop",
            PieceClass::Rook => "rook",
            PieceClass::Queen => "queen",
            PieceClass::King => "king",
        };
        f.write_str(name)
    }
}

/// Address of a tile as `(file, rank)`.
///
/// Coordinates are signed and unbounded on purpose: stepping off the edge of
/// the board produces a location that simply has no tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardLocation {
    pub file: i8,
    pub rank: i8,
}

impl BoardLocation {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Shift by a file and rank offset. Saturates instead of wrapping, which
    /// keeps the result off-board for every supported board size.
    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Self {
        Self {
            file: self.file.saturating_add(d_file),
            rank: self.rank.saturating_add(d_rank),
        }
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.file) && self.rank >= 0 {
            write!(f, "{}{}", char::from(b'a' + self.file as u8), self.rank as i16 + 1)
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

/// Stable handle of a piece inside a `TileBoard` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
