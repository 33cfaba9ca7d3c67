//! Board layout notation parser and generator.
//!
//! A layout is the piece-placement field of FEN generalized to any board
//! size: rows separated by `/`, highest rank first, digits for runs of empty
//! tiles (multi-digit runs allowed), `PNBRQK` for White and `pnbrqk` for
//! Black. Every row must describe the same number of files.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::MAX_BOARD_DIMENSION;
use crate::game_state::chess_types::{BoardLocation, PieceClass, Team};
use crate::game_state::tile_board::TileBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub class: PieceClass,
    pub team: Team,
    pub location: BoardLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLayout {
    pub files: i8,
    pub ranks: i8,
    pub placements: Vec<Placement>,
}

pub fn parse_layout(layout: &str) -> ChessResult<ParsedLayout> {
    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() > MAX_BOARD_DIMENSION as usize {
        return Err(ChessErrors::InvalidLayout(format!(
            "{} ranks exceeds the maximum of {MAX_BOARD_DIMENSION}",
            rows.len()
        )));
    }
    let ranks = rows.len() as i8;

    let mut width: Option<i8> = None;
    let mut placements = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        let rank = ranks - 1 - row_idx as i8;
        let mut file: usize = 0;
        let mut pending_run: usize = 0;

        for ch in row.chars() {
            if let Some(digit) = ch.to_digit(10) {
                pending_run = pending_run * 10 + digit as usize;
                if pending_run > MAX_BOARD_DIMENSION as usize {
                    return Err(ChessErrors::InvalidLayout(format!(
                        "empty run too long in row '{row}'"
                    )));
                }
                continue;
            }

            file += pending_run;
            pending_run = 0;

            let (class, team) = piece_from_char(ch).ok_or_else(|| {
                ChessErrors::InvalidLayout(format!("unexpected character '{ch}' in row '{row}'"))
            })?;
            if file >= MAX_BOARD_DIMENSION as usize {
                return Err(ChessErrors::InvalidLayout(format!("row '{row}' is too wide")));
            }
            placements.push(Placement {
                class,
                team,
                location: BoardLocation::new(file as i8, rank),
            });
            file += 1;
        }
        file += pending_run;

        if file == 0 || file > MAX_BOARD_DIMENSION as usize {
            return Err(ChessErrors::InvalidLayout(format!(
                "row '{row}' describes {file} files"
            )));
        }
        let row_width = file as i8;
        match width {
            None => width = Some(row_width),
            Some(expected) if expected != row_width => {
                return Err(ChessErrors::InvalidLayout(format!(
                    "row '{row}' has {row_width} files, expected {expected}"
                )));
            }
            Some(_) => {}
        }
    }

    Ok(ParsedLayout {
        files: width.unwrap_or(0),
        ranks,
        placements,
    })
}

fn piece_from_char(ch: char) -> Option<(PieceClass, Team)> {
    let team = if ch.is_ascii_uppercase() {
        Team::White
    } else {
        Team::Black
    };
    let class = match ch.to_ascii_lowercase() {
        'p' => PieceClass::Pawn,
        'n' => PieceClass::Knight,
        'b' => PieceClass::Bishop,
        'r' => PieceClass::Rook,
        'q' => PieceClass::Queen,
        'k' => PieceClass::King,
        _ => return None,
    };
    Some((class, team))
}

/// Layout character for a piece; inverse of the parser's mapping.
pub fn piece_to_char(class: PieceClass, team: Team) -> char {
    let ch = match class {
        PieceClass::Pawn => 'p',
        PieceClass::Knight => 'n',
        PieceClass::Bishop => 'b',
        PieceClass::Rook => 'r',
        PieceClass::Queen => 'q',
        PieceClass::King => 'k',
    };
    match team {
        Team::White => ch.to_ascii_uppercase(),
        Team::Black => ch,
    }
}

/// Layout string for the current board, highest rank first.
pub fn generate_layout(board: &TileBoard) -> String {
    let mut rows = Vec::with_capacity(board.ranks() as usize);
    for rank in (0..board.ranks()).rev() {
        let mut row = String::new();
        let mut empty_run = 0usize;
        for file in 0..board.files() {
            match board.piece_at(BoardLocation::new(file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        row.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    row.push(piece_to_char(piece.class(), piece.team()));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            row.push_str(&empty_run.to_string());
        }
        rows.push(row);
    }
    rows.join("/")
}
