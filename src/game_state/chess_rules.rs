//! Canonical rule constants.
//!
//! Board dimensions and the starting layout used by `TileBoard` setup.

/// Files on a standard board.
pub const DEFAULT_FILES: i8 = 8;

/// Ranks on a standard board.
pub const DEFAULT_RANKS: i8 = 8;

/// Largest supported width or height. Keeps every one- or two-tile offset of
/// an on-board location representable without wrapping.
pub const MAX_BOARD_DIMENSION: i8 = 64;

/// Standard starting layout in board layout notation (highest rank first).
///
/// White occupies ranks 7 and 8 and advances toward rank 1; Black occupies
/// ranks 1 and 2 and advances toward rank 8.
pub const STARTING_LAYOUT: &str = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr";

