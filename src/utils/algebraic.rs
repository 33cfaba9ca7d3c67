//! Parsing of coordinate names (for example `d7`) into `BoardLocation`.
//! The reverse direction is `BoardLocation`'s `Display`.
//!
//! Files are letters from `a`, ranks are numbers from `1`; both map to
//! zero-based indices. Multi-digit ranks are accepted for tall boards.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::MAX_BOARD_DIMENSION;
use crate::game_state::chess_types::BoardLocation;

/// Convert a coordinate name such as `"e4"` to a location.
pub fn algebraic_to_location(square: &str) -> ChessResult<BoardLocation> {
    let invalid = || ChessErrors::InvalidAlgebraic(square.to_owned());

    let mut chars = square.chars();
    let file_char = chars.next().ok_or_else(invalid)?;
    if !file_char.is_ascii_lowercase() {
        return Err(invalid());
    }
    let file = file_char as u8 - b'a';

    let rank_part = chars.as_str();
    if rank_part.is_empty() || !rank_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let rank = rank_part.parse::<u16>().map_err(|_| invalid())?;
    if rank == 0 || rank > MAX_BOARD_DIMENSION as u16 {
        return Err(invalid());
    }

    Ok(BoardLocation::new(file as i8, rank as i8 - 1))
}
