//! Terminal-oriented Unicode board renderer.
//!
//! Highest rank is printed first, matching layout notation.

use crate::game_state::chess_types::{PieceClass, Team};
use crate::game_state::tile_board::TileBoard;

pub fn render_tile_board(board: &TileBoard) -> String {
    let files = board.files();
    let labels: String = (0..files)
        .map(|file| file_label(file).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str(&format!("   {labels}\n"));

    for rank in (0..board.ranks()).rev() {
        out.push_str(&format!("{:>2} ", rank as i16 + 1));
        for file in 0..files {
            let ch = board
                .tile_at(file, rank)
                .and_then(|tile| tile.occupant())
                .and_then(|id| board.piece(id))
                .map(|piece| piece_to_unicode(piece.team(), piece.class()))
                .unwrap_or('·');
            out.push(ch);
            if file + 1 < files {
                out.push(' ');
            }
        }
        out.push_str(&format!(" {}\n", rank as i16 + 1));
    }

    out.push_str(&format!("   {labels}"));
    out
}

fn file_label(file: i8) -> char {
    if (0..26).contains(&file) {
        char::from(b'a' + file as u8)
    } else {
        '?'
    }
}

fn piece_to_unicode(team: Team, class: PieceClass) -> char {
    match (team, class) {
        (Team::White, PieceClass::Pawn) => '♙',
        (Team::White, PieceClass::Knight) => '♘',
        (Team::White, PieceClass::Bishop) => '♗',
        (Team::White, PieceClass::Rook) => '♖',
        (Team::White, PieceClass::Queen) => '♕',
        (Team::White, PieceClass::King) => '♔',
        (Team::Black, PieceClass::Pawn) => '♟',
        (Team::Black, PieceClass::Knight) => '♞',
        (Team::Black, PieceClass::Bishop) => '♝',
        (Team::Black, PieceClass::Rook) => '♜',
        (Team::Black, PieceClass::Queen) => '♛',
        (Team::Black, PieceClass::King) => '♚',
    }
}
